//! Nullable primitive types for SQL drivers, JSON and XML.
//!
//! Every type pairs a value with a validity flag. An invalid value is
//! absent: SQL NULL, JSON `null`, an omitted XML element or attribute.
//!
//! # Overview
//!
//! - [`Nullable`] - the generic container, with the aliases below
//! - [`Primitive`] - per-kind parsing, formatting and driver width
//! - [`Scanner`] / [`Valuer`] - the relational driver protocol over [`DriverValue`]
//! - [`xml`] - element and attribute encoding
//! - [`DynamicValue`] - kind-erased view returned by [`Nullable::to_dynamic`]
//!
//! | Alias | Value type | Driver family |
//! |---|---|---|
//! | [`NullBool`] | `bool` | bool |
//! | [`NullInt32`] | `i32` | int64 |
//! | [`NullInt64`] | `i64` | int64 |
//! | [`NullInt`] | `isize` | int64 |
//! | [`NullUInt32`] | `u32` | int64 |
//! | [`NullFloat32`] | `f32` | float64 |
//! | [`NullString`] | `String` | string |
//! | [`NullTime`] | `DateTime<FixedOffset>` | timestamp |
//!
//! # Example
//!
//! ```
//! use nulls::xml::{Document, StartElement, XmlWriter};
//! use nulls::{DriverValue, NullFloat32, NullString, Scanner, Valuer};
//!
//! let score = NullFloat32::new(3.22);
//! assert_eq!(score.encode_xml_attr("score").unwrap().value, "3.22");
//! assert_eq!(score.value().unwrap(), DriverValue::Float64(f64::from(3.22_f32)));
//!
//! let mut writer = XmlWriter::new();
//! NullString::default()
//!     .encode_xml(&mut writer, &StartElement::new("name"))
//!     .unwrap();
//! assert_eq!(writer.flush(), "");
//!
//! let doc = Document::parse("<row><name>ada</name></row>").unwrap();
//! let mut name = NullString::default();
//! name.decode_xml_child(doc.root_element(), "name").unwrap();
//! assert_eq!(name.as_option().map(String::as_str), Some("ada"));
//!
//! name.scan(&DriverValue::Null).unwrap();
//! assert!(!name.valid);
//! ```

mod driver;
mod dynamic;
mod error;
mod nullable;
mod parse;
mod serde_impl;
mod types;

pub mod xml;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use chrono;

pub use driver::{scan_bool, scan_f64, scan_i64, scan_string, DriverValue, Scanner, Valuer};
pub use dynamic::DynamicValue;
pub use error::{NullError, PrimitiveKind};
pub use nullable::{Nullable, Primitive};
pub use types::time::{format_rfc3339_nano, parse_rfc3339};

use chrono::{DateTime, FixedOffset};

pub type NullBool = Nullable<bool>;
pub type NullInt32 = Nullable<i32>;
pub type NullInt64 = Nullable<i64>;
/// Platform-width integer.
pub type NullInt = Nullable<isize>;
pub type NullUInt32 = Nullable<u32>;
pub type NullFloat32 = Nullable<f32>;
pub type NullString = Nullable<String>;
pub type NullTime = Nullable<DateTime<FixedOffset>>;
