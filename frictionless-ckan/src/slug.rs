//! Keyword normalization for CKAN tag names.

use std::sync::LazyLock;

use regex::Regex;

static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"['"‘’“”]+"#).unwrap());

static THOUSANDS_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d),(\d)").unwrap());

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Turn free keyword text into a CKAN tag name.
///
/// The text is lowercased, quotes and digit group separators are dropped,
/// and every run of characters that is neither a letter nor a digit becomes
/// a single `-`. Leading and trailing hyphens are stripped.
///
/// ```rust
/// use frictionless_ckan::slug::slugify;
///
/// assert_eq!(slugify("World Bank"), "world-bank");
/// assert_eq!(slugify("economy!!!"), "economy");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let unquoted = QUOTES.replace_all(&lowered, "");
    // Second pass catches single-digit groups such as "1,2,3".
    let joined = THOUSANDS_SEPARATOR.replace_all(&unquoted, "$1$2");
    let joined = THOUSANDS_SEPARATOR.replace_all(&joined, "$1$2");
    let hyphenated = DISALLOWED.replace_all(&joined, "-");
    hyphenated.trim_matches('-').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_keywords() {
        assert_eq!(slugify("economy!!!"), "economy");
        assert_eq!(slugify("World Bank"), "world-bank");
    }

    #[test]
    fn test_runs_collapse_to_single_hyphen() {
        assert_eq!(slugify("  GDP -- per / capita  "), "gdp-per-capita");
        assert_eq!(slugify("open_data"), "open-data");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_quotes_are_dropped() {
        assert_eq!(slugify("Children's Health"), "childrens-health");
        assert_eq!(slugify("\"quoted\" words"), "quoted-words");
    }

    #[test]
    fn test_digit_separators() {
        assert_eq!(slugify("Top 1,000,000 Cities"), "top-1000000-cities");
        assert_eq!(slugify("1, 2, 3"), "1-2-3");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(slugify("Économie Générale"), "économie-générale");
    }

    #[test]
    fn test_already_slugified_is_unchanged() {
        assert_eq!(slugify("world-bank"), "world-bank");
        assert_eq!(slugify(&slugify("Health & Safety")), "health-safety");
    }
}
