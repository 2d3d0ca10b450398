//! Data types shared by the converters.

mod extra;

pub use extra::Extra;

/// An ordered mapping of field names to JSON values.
///
/// Both Frictionless descriptors and CKAN metadata are handled as plain
/// records; no schema object is materialized. Key order is insertion order.
pub type Record = serde_json::Map<String, serde_json::Value>;
