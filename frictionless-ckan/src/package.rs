use serde_json::Value;

use crate::config::{ConverterConfig, LicensePolicy};
use crate::error::{ConvertError, Result};
use crate::json::to_canonical_string;
use crate::mapping::PACKAGE_MAPPING;
use crate::models::{Extra, Record};
use crate::resource::convert_resource;
use crate::slug::slugify;

/// Convert a Frictionless data package to a CKAN package (dataset) using the
/// default [`ConverterConfig`].
///
/// See [`convert_package_with`] for the conversion rules.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use frictionless_ckan::convert_package;
///
/// let package = json!({
///     "name": "gdp",
///     "description": "Country, regional and world GDP in current USD.",
///     "keywords": ["economy!!!", "World Bank"],
///     "last_updated": "2020-01-01"
/// });
/// let converted = convert_package(package.as_object().unwrap().clone()).unwrap();
///
/// assert_eq!(
///     serde_json::Value::Object(converted),
///     json!({
///         "name": "gdp",
///         "notes": "Country, regional and world GDP in current USD.",
///         "tags": [{"name": "economy"}, {"name": "world-bank"}],
///         "extras": [{"key": "last_updated", "value": "2020-01-01"}]
///     })
/// );
/// ```
pub fn convert_package(package: Record) -> Result<Record> {
    convert_package_with(package, &ConverterConfig::default())
}

/// Convert a Frictionless data package to a CKAN package (dataset)
///
/// The conversion runs in this order, each step working on the output of
/// the previous one:
///
/// 1. `description` and `homepage` are renamed to `notes` and `url`.
/// 2. Every entry of `resources` goes through [`convert_resource`].
/// 3. The first entry of `licenses` fills `license_id`, `license_title`
///    and `license_url`, according to [`LicensePolicy`].
/// 4. The first author (role absent, null or `"author"`) and the first
///    maintainer of `contributors` fill `author`/`author_email` and
///    `maintainer`/`maintainer_email`. The list is dropped when those fields
///    represent it completely.
/// 5. `keywords` become `tags`, one `{"name": slug}` per keyword.
/// 6. Every field CKAN has no slot for is moved into `extras`. Lists and
///    objects are stored as canonical JSON text.
///
/// # Errors
///
/// Missing fields, nulls and empty lists are never errors. A
/// [`ConvertError::InvalidType`] is returned when a field contradicts the
/// descriptor format, e.g. `resources` is not a list or a contributor is
/// not an object.
pub fn convert_package_with(mut package: Record, config: &ConverterConfig) -> Result<Record> {
    rename_fields(&mut package);
    convert_resources(&mut package)?;
    extract_license(&mut package, config.license_policy)?;
    extract_contributors(&mut package)?;
    convert_keywords(&mut package)?;
    sweep_extras(&mut package, config)?;
    Ok(package)
}

fn rename_fields(package: &mut Record) {
    for (source, target) in PACKAGE_MAPPING {
        if let Some(value) = package.shift_remove(*source) {
            tracing::trace!(from = *source, to = *target, "renamed package field");
            package.insert((*target).to_owned(), value);
        }
    }
}

fn convert_resources(package: &mut Record) -> Result<()> {
    let Some(resources) = package.get_mut("resources") else {
        return Ok(());
    };

    match resources {
        Value::Null => Ok(()),
        Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                match item.take() {
                    Value::Object(resource) => *item = Value::Object(convert_resource(resource)),
                    other => {
                        return Err(ConvertError::invalid_type(
                            format!("resources[{index}]"),
                            "an object",
                            &other,
                        ));
                    }
                }
            }
            Ok(())
        }
        other => Err(ConvertError::invalid_type("resources", "a list", other)),
    }
}

/// Borrow a non-empty list field. Absent, null and empty lists yield `None`.
fn non_empty_list<'a>(package: &'a Record, field: &str) -> Result<Option<&'a Vec<Value>>> {
    match package.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(ConvertError::invalid_type(field, "a list", other)),
    }
}

fn entry<'a>(field: &str, index: usize, value: &'a Value) -> Result<&'a Record> {
    value
        .as_object()
        .ok_or_else(|| ConvertError::invalid_type(format!("{field}[{index}]"), "an object", value))
}

fn field_or_null(record: &Record, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn extract_license(package: &mut Record, policy: LicensePolicy) -> Result<()> {
    let Some(licenses) = non_empty_list(package, "licenses")? else {
        return Ok(());
    };
    let first = entry("licenses", 0, &licenses[0])?;
    let count = licenses.len();

    let license_id = field_or_null(first, "name");
    let license_title = field_or_null(first, "title");
    let license_url = match policy {
        LicensePolicy::Reference => first.get("path").cloned(),
        LicensePolicy::Consume => Some(field_or_null(first, "path")),
    };

    tracing::debug!(license_id = %license_id, count, "extracted license");
    package.insert("license_id".to_owned(), license_id);
    package.insert("license_title".to_owned(), license_title);
    if let Some(url) = license_url {
        package.insert("license_url".to_owned(), url);
    }

    if policy == LicensePolicy::Consume && count == 1 {
        package.shift_remove("licenses");
    }
    Ok(())
}

/// A contributor's role, with an explicit null treated like an absent one.
fn role(contributor: &Record) -> Option<&Value> {
    contributor.get("role").filter(|role| !role.is_null())
}

fn has_role(contributor: &Record, name: &str) -> bool {
    role(contributor).and_then(Value::as_str) == Some(name)
}

fn is_author(contributor: &Record) -> bool {
    role(contributor).is_none() || has_role(contributor, "author")
}

fn is_maintainer(contributor: &Record) -> bool {
    has_role(contributor, "maintainer")
}

/// Whether the author and maintainer fields hold everything the
/// contributor list says, so the list itself need not go into `extras`.
fn contributors_fully_extracted(contributors: &[&Record]) -> bool {
    match contributors {
        [only] => is_author(only) || is_maintainer(only),
        [first, second] => {
            let both_unset = role(first).is_none() && role(second).is_none();
            let both_maintainers = is_maintainer(first) && is_maintainer(second);
            let both_authors = has_role(first, "author") && has_role(second, "author");
            !(both_unset || both_maintainers || both_authors)
        }
        _ => false,
    }
}

fn extract_contributors(package: &mut Record) -> Result<()> {
    let Some(list) = non_empty_list(package, "contributors")? else {
        return Ok(());
    };
    let contributors = list
        .iter()
        .enumerate()
        .map(|(index, value)| entry("contributors", index, value))
        .collect::<Result<Vec<_>>>()?;

    let author = contributors
        .iter()
        .find(|c| is_author(c))
        .map(|c| (field_or_null(c, "title"), field_or_null(c, "email")));
    let maintainer = contributors
        .iter()
        .find(|c| is_maintainer(c))
        .map(|c| (field_or_null(c, "title"), field_or_null(c, "email")));
    let remove = contributors_fully_extracted(&contributors);

    if let Some((name, email)) = author {
        tracing::debug!(author = %name, "extracted author from contributors");
        package.insert("author".to_owned(), name);
        package.insert("author_email".to_owned(), email);
    }
    if let Some((name, email)) = maintainer {
        tracing::debug!(maintainer = %name, "extracted maintainer from contributors");
        package.insert("maintainer".to_owned(), name);
        package.insert("maintainer_email".to_owned(), email);
    }
    if remove {
        package.shift_remove("contributors");
    }
    Ok(())
}

fn convert_keywords(package: &mut Record) -> Result<()> {
    let Some(keywords) = non_empty_list(package, "keywords")? else {
        return Ok(());
    };

    let mut tags = Vec::with_capacity(keywords.len());
    for (index, keyword) in keywords.iter().enumerate() {
        let text = keyword.as_str().ok_or_else(|| {
            ConvertError::invalid_type(format!("keywords[{index}]"), "a string", keyword)
        })?;
        let mut tag = Record::new();
        tag.insert("name".to_owned(), Value::String(slugify(text)));
        tags.push(Value::Object(tag));
    }

    package.insert("tags".to_owned(), Value::Array(tags));
    package.shift_remove("keywords");
    Ok(())
}

fn into_extra(key: String, value: Value) -> Result<Extra> {
    let value = match value {
        Value::Array(_) | Value::Object(_) => Value::String(to_canonical_string(&value)?),
        scalar => scalar,
    };
    Ok(Extra::new(key, value))
}

fn sweep_extras(package: &mut Record, config: &ConverterConfig) -> Result<()> {
    let unknown: Vec<String> = package
        .keys()
        .filter(|key| !config.keeps_package_key(key))
        .cloned()
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }

    let mut extras = Vec::with_capacity(unknown.len());
    for key in unknown {
        let value = package.shift_remove(&key).unwrap_or(Value::Null);
        tracing::debug!(key = %key, "moved package field into extras");
        extras.push(Value::from(into_extra(key, value)?));
    }

    match package.get_mut("extras") {
        Some(Value::Array(existing)) if !existing.is_empty() => existing.extend(extras),
        None | Some(Value::Null) | Some(Value::Array(_)) => {
            package.insert("extras".to_owned(), Value::Array(extras));
        }
        Some(other) => return Err(ConvertError::invalid_type("extras", "a list", other)),
    }
    Ok(())
}
