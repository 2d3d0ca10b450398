use crate::mapping::RESOURCE_MAPPING;
use crate::models::Record;

/// Convert a Frictionless resource to a CKAN resource
///
/// Renames `bytes` to `size`, `mediatype` to `mimetype` and `path` to
/// `url`. Every other field, including nested lists and objects, is passed
/// through unchanged. Nothing is required: absent fields are skipped.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use frictionless_ckan::convert_resource;
///
/// let resource = json!({"path": "/home/user/data.csv", "format": "CSV"});
/// let converted = convert_resource(resource.as_object().unwrap().clone());
///
/// assert_eq!(
///     serde_json::Value::Object(converted),
///     json!({"format": "CSV", "url": "/home/user/data.csv"})
/// );
/// ```
pub fn convert_resource(mut resource: Record) -> Record {
    for (source, target) in RESOURCE_MAPPING {
        if let Some(value) = resource.shift_remove(*source) {
            tracing::trace!(from = *source, to = *target, "renamed resource field");
            resource.insert((*target).to_owned(), value);
        }
    }
    resource
}
