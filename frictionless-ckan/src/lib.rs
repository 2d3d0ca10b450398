//! Conversion of Frictionless data-package metadata into CKAN metadata.
//!
//! [`convert_resource`] maps a single Frictionless resource onto a CKAN
//! resource, and [`convert_package`] maps a whole data package onto a CKAN
//! dataset, nested resources included. Fields without a CKAN counterpart
//! are never dropped: they are preserved in the dataset's `extras` list.
//!
//! Both converters are pure functions over JSON records. Reading the
//! `datapackage.json` and talking to a CKAN instance is left to the caller.

pub mod config;
pub mod converter;
pub mod error;
pub mod json;
pub mod mapping;
pub mod models;
pub mod package;
pub mod resource;
pub mod slug;

// Re-export the converters and configuration for easy access
pub use config::{ConverterConfig, LicensePolicy};
pub use converter::Converter;
pub use error::{ConvertError, Result};
pub use models::{Extra, Record};
pub use package::{convert_package, convert_package_with};
pub use resource::convert_resource;
