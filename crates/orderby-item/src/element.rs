//! Binding to the generic document-element model.
//!
//! Elements are `serde_json::Value` trees. This module adds the type tag used
//! to classify them and the raw-text constructor that produces them. The
//! constructor never interprets date-like strings; they stay `Value::String`.

use crate::error::Result;
use serde_json::Value;
use std::fmt;

/// Type tag of a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ElementKind {
    /// Classify a document element by its variant.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ElementKind::Null,
            Value::Bool(_) => ElementKind::Boolean,
            Value::Number(_) => ElementKind::Number,
            Value::String(_) => ElementKind::String,
            Value::Array(_) => ElementKind::Array,
            Value::Object(_) => ElementKind::Object,
        }
    }

    /// Lowercase JSON type name, as used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Null => "null",
            ElementKind::Boolean => "boolean",
            ElementKind::Number => "number",
            ElementKind::String => "string",
            ElementKind::Array => "array",
            ElementKind::Object => "object",
        }
    }

    /// True for the leaf kinds an order-by item may carry.
    pub fn is_scalar(self) -> bool {
        !matches!(self, ElementKind::Array | ElementKind::Object)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construct a document element from raw JSON bytes.
///
/// Malformed input is reported as [`OrderByItemError::Json`](crate::OrderByItemError::Json)
/// with serde_json's line and column information intact.
pub fn parse_element(bytes: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Construct a document element from raw JSON text.
pub fn parse_element_str(text: &str) -> Result<Value> {
    Ok(serde_json::from_str(text)?)
}
