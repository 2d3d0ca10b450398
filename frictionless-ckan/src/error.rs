use serde_json::Value;
use thiserror::Error;

/// Errors that can occur when converting Frictionless metadata to CKAN
///
/// Missing fields, nulls and empty lists are never errors. These variants
/// only cover input whose shape contradicts the Frictionless descriptor
/// format, e.g. a `resources` field that is not a list.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// A field holds a value of the wrong JSON type
    #[error("Invalid type for `{field}`: expected {expected}, got {actual}")]
    InvalidType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The document handed to a converter is not a JSON object
    #[error("Expected a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// Encoding a structured value for `extras` failed
    #[error("Failed to serialize extras value: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConvertError {
    /// Create a new invalid type error for `field`, describing `value`
    pub fn invalid_type<S: Into<String>>(field: S, expected: &'static str, value: &Value) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            actual: json_type_name(value),
        }
    }

    /// Create a new error for a top-level document that is not an object
    pub fn not_an_object(value: &Value) -> Self {
        Self::NotAnObject {
            actual: json_type_name(value),
        }
    }
}

/// Human readable name of a JSON value's type, used in error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Type alias for Results using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
