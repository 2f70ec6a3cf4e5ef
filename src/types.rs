use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::{AGE_KEY, DIAGNOSIS_KEY, NAME_KEY};

/// Raw patient entry exactly as it appears in the source array.
/// Key order follows the source document.
pub type RawRecord = Map<String, Value>;

/// A patient entry after name and age normalization.
///
/// The record keeps every field of its raw form in source key order; only
/// `name` (always a string) and `age` (always an integer) are rewritten.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PatientRecord {
    fields: Map<String, Value>,
}

impl PatientRecord {
    /// Builds a record from fields whose `name` and `age` are already normalized.
    pub(crate) fn from_normalized(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn name(&self) -> &str {
        self.fields
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn age(&self) -> i64 {
        self.fields
            .get(AGE_KEY)
            .and_then(Value::as_i64)
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub fn gender(&self) -> Option<&Value> {
        self.fields.get(crate::constants::GENDER_KEY)
    }

    pub fn diagnosis(&self) -> Option<&Value> {
        self.fields.get(DIAGNOSIS_KEY)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Equality key over every field, in the record's own key order
    pub fn dedup_key(&self) -> DedupKey {
        // Value's Display renders compact JSON and cannot fail
        DedupKey(Value::Object(self.fields.clone()).to_string())
    }
}

/// Ordered rendering of all field/value pairs of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey(String);

impl DedupKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
