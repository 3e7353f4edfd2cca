//! Health records as deserialized from an appliance dump.
//!
//! A dump is a JSON array of loosely structured objects. Only a handful of
//! keys matter here, and none of them are guaranteed to be present, so a
//! record keeps the raw JSON map and exposes typed lookups over it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Health Resource Identifier, a slash-delimited resource path.
pub const HRI: &str = "HRI";
/// Observation timestamp (UTC), emitted verbatim.
pub const DATE: &str = "Date";
/// The numeric reading.
pub const VALUE: &str = "Value";
/// Free text, by convention `"<make> <serial>"`.
pub const COMPONENT_NAME: &str = "ComponentName";
pub const COMPONENT_TYPE: &str = "ComponentType";
pub const SEVERITY: &str = "Severity";
pub const STATUS: &str = "Status";
pub const UNITS: &str = "Units";

/// One observation from a health dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthRecord {
    fields: Map<String, Value>,
}

impl HealthRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful for assembling records by hand.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The field as a string slice, if it is a JSON string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// The HRI, or `""` when absent or not a string.
    pub fn hri(&self) -> &str {
        self.get_str(HRI).unwrap_or("")
    }

    /// True when the field exists and holds a truthy value (see [`is_truthy`]).
    pub fn has_value(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for HealthRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Whether a JSON value counts as present.
///
/// `null`, `false`, `""`, `[]`, `{}` and any number equal to zero are all
/// treated as absent. A drive that genuinely reads 0 is therefore
/// indistinguishable from one with no reading.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Natural text form of a field: strings unquoted, everything else as JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
