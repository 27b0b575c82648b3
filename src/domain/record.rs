//! Record types
//!
//! A record is one input row: an opaque identifier plus an ordered mapping of field name
//! to JSON value. Field order is the order of the keys in the source JSON object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Record identifier newtype wrapper
///
/// Identifiers are opaque; any string (including an empty one) is accepted.
///
/// # Examples
///
/// ```
/// use scrubber::domain::RecordId;
///
/// let id = RecordId::new("1042");
/// assert_eq!(id.as_str(), "1042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new RecordId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the record ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A single input record
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Record identifier
    pub id: RecordId,

    /// Field name to value, in source order
    pub fields: Map<String, Value>,
}

impl Record {
    /// Creates a record from an already parsed JSON object
    pub fn new(id: impl Into<RecordId>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Parses `data_json` into a record
    ///
    /// Returns `None` when the payload is not valid JSON or is not a JSON object.
    pub fn from_json(id: impl Into<RecordId>, data_json: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(data_json) {
            Ok(Value::Object(fields)) => Some(Self::new(id, fields)),
            _ => None,
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Renders a JSON value as the string the classifier sees
///
/// Strings are taken as-is. Booleans and null read as `True`, `False` and `None`, the
/// spelling upstream exports use; numbers, arrays and objects use their compact JSON text
/// (`42`, `{"a":1}`).
pub fn coerce_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}
