//! The order-by item wrapper and its scalar projection.
//!
//! An order-by item is a JSON object of the form `{"item": <scalar>}` (or `{}`
//! when the sort key is undefined for that row). The wrapper is immutable:
//! `is_defined`, `kind` and `item` are recomputed from the object on each call.

use crate::element::ElementKind;
use crate::error::{OrderByItemError, Result};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the single field an order-by item object carries.
pub const ITEM_FIELD: &str = "item";

/// Scalar projection of an order-by item value.
///
/// Numbers are always carried as `f64`; integer/decimal distinctions from the
/// source text are not preserved.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Primitive {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Primitive::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Primitive::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }

    /// Type tag this primitive occupies in the document-element model.
    pub fn kind(&self) -> ElementKind {
        match self {
            Primitive::Null => ElementKind::Null,
            Primitive::Bool(_) => ElementKind::Boolean,
            Primitive::Number(_) => ElementKind::Number,
            Primitive::String(_) => ElementKind::String,
        }
    }

    /// Convert back into a document element.
    ///
    /// Non-finite numbers have no JSON form and become `Value::Null`.
    pub fn to_value(&self) -> Value {
        match self {
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(*b),
            Primitive::Number(n) => match crate::codec::as_safe_integer(*n) {
                Some(i) => Value::from(i),
                None => serde_json::Number::from_f64(*n)
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
            },
            Primitive::String(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => f.write_str("null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Number(n)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::String(s)
    }
}

/// Project a document element onto a [`Primitive`].
///
/// Strings, numbers, booleans and null project directly. Objects and arrays
/// are rejected with [`OrderByItemError::UnsupportedType`].
pub fn project(value: &Value) -> Result<Primitive> {
    match value {
        Value::String(s) => Ok(Primitive::String(s.clone())),
        // as_f64 only returns None under serde_json's arbitrary_precision.
        Value::Number(n) => n
            .as_f64()
            .map(Primitive::Number)
            .ok_or(OrderByItemError::UnsupportedType {
                found: ElementKind::Number,
            }),
        Value::Bool(b) => Ok(Primitive::Bool(*b)),
        Value::Null => Ok(Primitive::Null),
        Value::Array(_) | Value::Object(_) => {
            let found = ElementKind::of(value);
            tracing::debug!(%found, "rejected non-scalar order-by item");
            Err(OrderByItemError::UnsupportedType { found })
        }
    }
}

/// Immutable wrapper over the object form of an order-by item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderByItem {
    object: Map<String, Value>,
}

impl OrderByItem {
    /// Wrap a document element.
    ///
    /// Fails with [`OrderByItemError::InvalidArgument`] when `element` is
    /// `None` and with [`OrderByItemError::TypeMismatch`] when it is not an
    /// object. The object may or may not contain [`ITEM_FIELD`]; any other
    /// fields are kept but ignored.
    pub fn new(element: Option<Value>) -> Result<Self> {
        match element {
            Some(Value::Object(object)) => Ok(Self { object }),
            Some(other) => Err(OrderByItemError::TypeMismatch {
                found: ElementKind::of(&other),
            }),
            None => Err(OrderByItemError::InvalidArgument(
                "order-by item element must be present".to_string(),
            )),
        }
    }

    pub fn from_object(object: Map<String, Value>) -> Self {
        Self { object }
    }

    /// An item whose sort key is undefined. Serializes as `{}`.
    pub fn undefined() -> Self {
        Self::default()
    }

    /// Whether the object carries [`ITEM_FIELD`]. `{"item": null}` is defined.
    pub fn is_defined(&self) -> bool {
        self.object.contains_key(ITEM_FIELD)
    }

    /// Type tag of the value under [`ITEM_FIELD`].
    pub fn kind(&self) -> Result<ElementKind> {
        self.field().map(ElementKind::of)
    }

    /// Scalar projection of the value under [`ITEM_FIELD`].
    pub fn item(&self) -> Result<Primitive> {
        project(self.field()?)
    }

    /// The raw element under [`ITEM_FIELD`], if present.
    pub fn element(&self) -> Option<&Value> {
        self.object.get(ITEM_FIELD)
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.object
    }

    pub fn into_object(self) -> Map<String, Value> {
        self.object
    }

    fn field(&self) -> Result<&Value> {
        self.object
            .get(ITEM_FIELD)
            .ok_or(OrderByItemError::MissingField(ITEM_FIELD))
    }
}

impl TryFrom<Value> for OrderByItem {
    type Error = OrderByItemError;

    fn try_from(value: Value) -> Result<Self> {
        OrderByItem::new(Some(value))
    }
}

impl From<Primitive> for OrderByItem {
    fn from(primitive: Primitive) -> Self {
        let mut object = Map::new();
        object.insert(ITEM_FIELD.to_string(), primitive.to_value());
        Self { object }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_number_is_f64() {
        assert_eq!(project(&json!(5)).unwrap(), Primitive::Number(5.0));
        assert_eq!(project(&json!(-2.5)).unwrap(), Primitive::Number(-2.5));
    }

    #[test]
    fn project_rejects_containers() {
        assert!(matches!(
            project(&json!([])),
            Err(OrderByItemError::UnsupportedType {
                found: ElementKind::Array
            })
        ));
        assert!(matches!(
            project(&json!({"a": 1})),
            Err(OrderByItemError::UnsupportedType {
                found: ElementKind::Object
            })
        ));
    }

    #[test]
    fn primitive_to_value_prefers_integers() {
        assert_eq!(Primitive::Number(5.0).to_value(), json!(5));
        assert_eq!(Primitive::Number(0.5).to_value(), json!(0.5));
        assert_eq!(Primitive::Number(f64::NAN).to_value(), Value::Null);
    }

    #[test]
    fn from_primitive_is_defined() {
        let item = OrderByItem::from(Primitive::from("x"));
        assert!(item.is_defined());
        assert_eq!(item.item().unwrap(), Primitive::String("x".into()));
    }

    #[test]
    fn primitive_kind_matches_projected_element() {
        for value in [json!(null), json!(true), json!(2), json!("s")] {
            assert_eq!(project(&value).unwrap().kind(), ElementKind::of(&value));
        }
    }

    #[test]
    fn primitive_display() {
        assert_eq!(Primitive::Null.to_string(), "null");
        assert_eq!(Primitive::Bool(true).to_string(), "true");
        assert_eq!(Primitive::Number(1.5).to_string(), "1.5");
        assert_eq!(Primitive::from("abc").to_string(), "abc");
    }
}
