//! Order-by item codec: JSON text to [`OrderByItem`] and back.
//!
//! The read side parses raw text or bytes straight into a document element and
//! wraps it. Callers that only hold an already-built `serde_json::Value` go
//! through [`decode_value`], which re-encodes the tree and parses it again so
//! the element always comes out of the same constructor.
//!
//! The write side emits `{"item": <scalar>}` for a defined item and `{}` for an
//! undefined one. Numbers are written from their `f64` projection: a finite,
//! integral value within ±2^53 is written as a JSON integer, anything else as
//! a float. Integers beyond 2^53 and high-precision decimals therefore do not
//! round-trip byte-for-byte.
//!
//! # Example
//! ```
//! use orderby_item::codec;
//! let item = codec::decode(r#"{"item": 5}"#).unwrap();
//! assert_eq!(codec::encode(&item).unwrap(), r#"{"item":5}"#);
//! ```

use crate::element;
use crate::error::{OrderByItemError, Result};
use crate::item::{OrderByItem, Primitive};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::io;

pub use crate::item::ITEM_FIELD;

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Decode an order-by item from JSON text.
pub fn decode(text: &str) -> Result<OrderByItem> {
    tracing::trace!(len = text.len(), "decoding order-by item from text");
    wrap(element::parse_element_str(text))
}

/// Decode an order-by item from raw JSON bytes.
pub fn decode_slice(bytes: &[u8]) -> Result<OrderByItem> {
    tracing::trace!(len = bytes.len(), "decoding order-by item from bytes");
    wrap(element::parse_element(bytes))
}

/// Decode an order-by item from a reader. The reader is consumed to EOF.
pub fn decode_reader<R: io::Read>(reader: R) -> Result<OrderByItem> {
    tracing::trace!("decoding order-by item from reader");
    wrap(serde_json::from_reader(reader).map_err(OrderByItemError::from))
}

/// Decode an order-by item from a pre-built JSON tree.
///
/// The tree is serialized back to text and parsed through
/// [`element::parse_element`]. Use [`decode_slice`] when the raw bytes are
/// still available.
pub fn decode_value(tree: &Value) -> Result<OrderByItem> {
    let text = serde_json::to_vec(tree)?;
    decode_slice(&text)
}

/// Encode an order-by item as compact JSON text.
///
/// Fails with [`OrderByItemError::UnsupportedType`] if the item holds a
/// non-scalar value.
pub fn encode(item: &OrderByItem) -> Result<String> {
    let payload = payload(item)?;
    Ok(serde_json::to_string(&Wire(payload.as_ref()))?)
}

pub fn encode_to_vec(item: &OrderByItem) -> Result<Vec<u8>> {
    let payload = payload(item)?;
    Ok(serde_json::to_vec(&Wire(payload.as_ref()))?)
}

/// Encode an order-by item into `writer`. The writer is not flushed.
pub fn encode_to_writer<W: io::Write>(writer: W, item: &OrderByItem) -> Result<()> {
    let payload = payload(item)?;
    serde_json::to_writer(writer, &Wire(payload.as_ref()))?;
    Ok(())
}

/// The integer a finite, integral `f64` within ±2^53 converts to exactly.
pub(crate) fn as_safe_integer(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

fn wrap(element: Result<Value>) -> Result<OrderByItem> {
    let item = element.and_then(|value| OrderByItem::new(Some(value)));
    if let Err(err) = &item {
        tracing::debug!(error = %err, "rejected order-by item");
    }
    item
}

/// The projected value to write, or `None` for an undefined item.
fn payload(item: &OrderByItem) -> Result<Option<Primitive>> {
    if item.is_defined() {
        item.item().map(Some)
    } else {
        Ok(None)
    }
}

/// Wire shape of an order-by item: a map with zero or one entry.
struct Wire<'a>(Option<&'a Primitive>);

impl Serialize for Wire<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(usize::from(self.0.is_some())))?;
        if let Some(primitive) = self.0 {
            map.serialize_entry(ITEM_FIELD, primitive)?;
        }
        map.end()
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Primitive::Null => serializer.serialize_unit(),
            Primitive::Bool(b) => serializer.serialize_bool(*b),
            Primitive::Number(n) => match as_safe_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Primitive::String(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for OrderByItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let payload = payload(self).map_err(ser::Error::custom)?;
        Wire(payload.as_ref()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for OrderByItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tree = Value::deserialize(deserializer)?;
        decode_value(&tree).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_integer_bounds() {
        assert_eq!(as_safe_integer(5.0), Some(5));
        assert_eq!(as_safe_integer(-MAX_SAFE_INTEGER), Some(-9_007_199_254_740_992));
        assert_eq!(as_safe_integer(MAX_SAFE_INTEGER * 2.0), None);
        assert_eq!(as_safe_integer(0.5), None);
        assert_eq!(as_safe_integer(f64::INFINITY), None);
        assert_eq!(as_safe_integer(f64::NAN), None);
    }

    #[test]
    fn undefined_item_has_no_payload() {
        assert!(payload(&OrderByItem::undefined()).unwrap().is_none());
    }
}
