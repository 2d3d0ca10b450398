use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Record;

/// Represents an extra key-value pair in a CKAN dataset
///
/// CKAN keeps every dataset field without a dedicated schema slot in the
/// package's `extras` list. Structured values are stored as JSON text,
/// scalars are stored as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    #[serde(rename = "key")]
    pub key: String,
    #[serde(rename = "value")]
    pub value: Value,
}

impl Extra {
    pub fn new(key: String, value: Value) -> Extra {
        Extra { key, value }
    }

    /// Convert the entry into the `{ "key": ..., "value": ... }` record
    /// appended to a package's `extras` list.
    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("key".to_owned(), Value::String(self.key));
        record.insert("value".to_owned(), self.value);
        record
    }
}

impl From<Extra> for Value {
    fn from(extra: Extra) -> Self {
        Value::Object(extra.into_record())
    }
}
