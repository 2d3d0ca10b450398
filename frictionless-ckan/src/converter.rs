use serde_json::Value;

use crate::config::ConverterConfig;
use crate::error::{ConvertError, Result};
use crate::models::Record;
use crate::package::convert_package_with;
use crate::resource::convert_resource;

/// # Frictionless to CKAN converter
///
/// Bundles a [`ConverterConfig`] with the resource and package conversions,
/// and accepts either records or arbitrary JSON documents.
///
/// ## Usage
///
/// ```rust
/// use serde_json::json;
/// use frictionless_ckan::{Converter, ConverterConfig, LicensePolicy};
///
/// let converter = Converter::new(
///     ConverterConfig::new()
///         .with_license_policy(LicensePolicy::Consume)
///         .with_known_key("theme_id"),
/// );
///
/// let dataset = converter
///     .package_value(json!({
///         "name": "gdp",
///         "theme_id": "economy",
///         "licenses": [{"name": "odc-odbl", "path": "https://opendatacommons.org/licenses/odbl/"}]
///     }))
///     .unwrap();
///
/// assert_eq!(dataset["license_id"], "odc-odbl");
/// assert_eq!(dataset["theme_id"], "economy");
/// assert!(dataset.get("extras").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    /// Create a new converter with the given configuration
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// The configuration this converter applies
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a Frictionless resource record. See [`convert_resource`].
    pub fn resource(&self, resource: Record) -> Record {
        convert_resource(resource)
    }

    /// Convert a Frictionless package record. See [`convert_package_with`].
    pub fn package(&self, package: Record) -> Result<Record> {
        convert_package_with(package, &self.config)
    }

    /// Convert a resource held in a JSON document
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotAnObject`] when `resource` is not a JSON object.
    pub fn resource_value(&self, resource: Value) -> Result<Value> {
        match resource {
            Value::Object(record) => Ok(Value::Object(self.resource(record))),
            other => Err(ConvertError::not_an_object(&other)),
        }
    }

    /// Convert a package held in a JSON document
    ///
    /// # Errors
    ///
    /// [`ConvertError::NotAnObject`] when `package` is not a JSON object, and
    /// every error [`convert_package_with`] returns.
    pub fn package_value(&self, package: Value) -> Result<Value> {
        match package {
            Value::Object(record) => self.package(record).map(Value::Object),
            other => Err(ConvertError::not_an_object(&other)),
        }
    }
}
