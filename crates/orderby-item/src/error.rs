//! Error types for order-by item construction, projection and (de)serialization.

use crate::element::ElementKind;
use thiserror::Error;

/// Errors that can occur while wrapping, reading or writing an order-by item.
#[derive(Error, Debug)]
pub enum OrderByItemError {
    /// A required element was absent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The wrapped element was not a JSON object.
    #[error("Type mismatch: expected object, found {found}")]
    TypeMismatch { found: ElementKind },

    /// The object does not carry the named field. Callers are expected to
    /// check [`OrderByItem::is_defined`](crate::OrderByItem::is_defined) first.
    #[error("Missing field: \"{0}\"")]
    MissingField(&'static str),

    /// Only scalar JSON leaves (string, number, boolean, null) can be projected.
    #[error("Unsupported order-by item type: {found}")]
    UnsupportedType { found: ElementKind },

    /// The raw input was not valid JSON, or could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout orderby-item.
pub type Result<T> = std::result::Result<T, OrderByItemError>;
