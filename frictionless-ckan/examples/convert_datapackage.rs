use frictionless_ckan::convert_package;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let datapackage = json!({
        "name": "gdp",
        "title": "Country, Regional and World GDP",
        "description": "Country, regional and world GDP in current US Dollars ($).",
        "homepage": "https://datahub.io/core/gdp",
        "licenses": [{"name": "ODC-PDDL-1.0", "path": "http://opendatacommons.org/licenses/pddl/"}],
        "keywords": ["GDP", "World Bank"],
        "contributors": [
            {"title": "Rufus Pollock", "email": "rufus@example.com"},
            {"title": "Data Team", "email": "data@example.com", "role": "maintainer"}
        ],
        "sources": [{"title": "World Bank", "path": "http://data.worldbank.org/indicator/NY.GDP.MKTP.CD"}],
        "resources": [{"name": "gdp", "path": "data/gdp.csv", "mediatype": "text/csv", "bytes": 524288}]
    });

    let record = datapackage.as_object().cloned().unwrap_or_default();
    let dataset = convert_package(record)?;

    println!("CKAN dataset:");
    println!("{}", serde_json::to_string_pretty(&dataset)?);

    Ok(())
}
