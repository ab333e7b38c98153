//! # orderby-item
//!
//! Typed accessor and JSON codec for **order-by items**: the single labeled
//! sort-key value a query partition attaches to each result row so that
//! sorted partial results from several partitions can be merged.
//!
//! On the wire an order-by item is `{"item": <scalar>}`, or `{}` when the sort
//! key is undefined for that row. The scalar is a string, number, boolean or
//! null; numbers are exposed as `f64`.
//!
//! ## Quick start
//!
//! ```rust
//! use orderby_item::{codec, ElementKind, Primitive};
//!
//! let item = codec::decode(r#"{"item": 5}"#).unwrap();
//! assert!(item.is_defined());
//! assert_eq!(item.kind().unwrap(), ElementKind::Number);
//! assert_eq!(item.item().unwrap(), Primitive::Number(5.0));
//!
//! // Write it back out
//! assert_eq!(codec::encode(&item).unwrap(), r#"{"item":5}"#);
//!
//! // Undefined sort keys stay an empty object
//! let missing = codec::decode("{}").unwrap();
//! assert!(!missing.is_defined());
//! assert_eq!(codec::encode(&missing).unwrap(), "{}");
//! ```
//!
//! ## Modules
//!
//! - [`item`]: `OrderByItem` wrapper, `Primitive` values, scalar projection
//! - [`codec`]: JSON text/bytes ↔ `OrderByItem`, plus serde impls
//! - [`element`]: Type tags and raw-JSON construction of document elements
//! - [`error`]: Error types for construction, projection and JSON failures

pub mod codec;
pub mod element;
pub mod error;
pub mod item;

pub use element::ElementKind;
pub use error::OrderByItemError;
pub use item::{project, OrderByItem, Primitive, ITEM_FIELD};
