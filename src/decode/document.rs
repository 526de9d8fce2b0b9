use serde_json::{Map, Value};

use crate::decode::error::DecodeError;

/// Schema-on-read view over a JSON object
///
/// Field reads never fail: a missing or wrong-typed field yields the
/// caller-supplied default. This replaces the per-type dictionary mapping
/// pattern with one generic layer.
#[derive(Debug, Clone)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Parse a JSON string into a document
    ///
    /// Fails only when the input is not valid JSON or the root is not an
    /// object; individual fields are validated lazily at read time.
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DecodeError::NotAnObject(json_kind(&other).to_string())),
        }
    }

    /// String field, or `default` when missing or not a string
    pub fn str_or(&self, key: &str, default: &str) -> String {
        match self.fields.get(key) {
            Some(Value::String(s)) => s.clone(),
            _ => default.to_string(),
        }
    }

    /// Unsigned integer field, or `default` when missing or not a u64
    pub fn u64_or(&self, key: &str, default: u64) -> u64 {
        match self.fields.get(key) {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(default),
            _ => default,
        }
    }

    /// Boolean field, or `default` when missing or not a bool
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.fields.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Array-of-strings field, empty when missing; non-string elements are
    /// skipped rather than failing the whole read
    pub fn str_list_or_empty(&self, key: &str) -> Vec<String> {
        match self.fields.get(key) {
            Some(Value::Array(values)) => values
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }
}

/// Types assembled from a document with per-field defaults
pub trait FromDocument {
    fn from_document(doc: &Document) -> Self;
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
