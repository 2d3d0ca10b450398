//! Canonical JSON text for structured `extras` values.
//!
//! CKAN stores structured extras as strings, and tools that round-trip
//! between CKAN and Frictionless compare those strings verbatim. The text
//! form therefore follows the encoder the rest of the CKAN tool chain uses
//! by default: `", "` between items, `": "` between a key and its value,
//! no newlines, and every non-ASCII character escaped as `\uXXXX`.

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;

use crate::error::Result;

/// [`Formatter`] producing the canonical text form described in the module
/// documentation.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.bytes().all(|b| b.is_ascii() && b != 0x7f) {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() && c != '\u{7f}' {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize `value` to canonical JSON text.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use frictionless_ckan::json::to_canonical_string;
///
/// let text = to_canonical_string(&json!([{"name": "odc-odbl"}])).unwrap();
/// assert_eq!(text, r#"[{"name": "odc-odbl"}]"#);
/// ```
pub fn to_canonical_string(value: &Value) -> Result<String> {
    let mut buf = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, CanonicalFormatter);
    value.serialize(&mut serializer)?;
    // The formatter only ever emits ASCII.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_separators() {
        assert_eq!(
            to_canonical_string(&json!([1, 2, 3, "string"])).unwrap(),
            r#"[1, 2, 3, "string"]"#
        );
        assert_eq!(
            to_canonical_string(&json!({"key1": "dict_to_jsonify"})).unwrap(),
            r#"{"key1": "dict_to_jsonify"}"#
        );
    }

    #[test]
    fn test_nested_keys_keep_insertion_order() {
        let value = json!({"zeta": 1, "alpha": {"b": [true, null], "a": 2.5}});
        assert_eq!(
            to_canonical_string(&value).unwrap(),
            r#"{"zeta": 1, "alpha": {"b": [true, null], "a": 2.5}}"#
        );
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(to_canonical_string(&json!([])).unwrap(), "[]");
        assert_eq!(to_canonical_string(&json!({})).unwrap(), "{}");
        assert_eq!(to_canonical_string(&json!([[], {}])).unwrap(), "[[], {}]");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(
            to_canonical_string(&json!({"country": "Côte d'Ivoire"})).unwrap(),
            r#"{"country": "C\u00f4te d'Ivoire"}"#
        );
        assert_eq!(
            to_canonical_string(&json!(["國內"])).unwrap(),
            r#"["\u570b\u5167"]"#
        );
        // Outside the BMP: surrogate pair
        assert_eq!(
            to_canonical_string(&json!(["😀"])).unwrap(),
            r#"["\ud83d\ude00"]"#
        );
    }

    #[test]
    fn test_control_characters_and_quotes() {
        assert_eq!(
            to_canonical_string(&json!(["a\"b\\c\n\u{7f}"])).unwrap(),
            r#"["a\"b\\c\n\u007f"]"#
        );
    }
}
