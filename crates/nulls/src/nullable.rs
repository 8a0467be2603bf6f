//! The generic [`Nullable`] container and its per-kind [`Primitive`] policy.

use roxmltree::Node;
use serde::{Deserializer, Serializer};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::xml::{self, StartElement, XmlAttr, XmlName, XmlWriter};

/// The JSON absence literal.
pub(crate) const JSON_NULL: &[u8] = b"null";

/// A primitive value paired with a validity flag.
///
/// When `valid` is false the value is absent: every encoder renders the
/// absence marker of its format (`null` in JSON, an omitted XML element or
/// attribute, [`DriverValue::Null`] for drivers) and `value` is ignored.
///
/// Instances are plain values. Decoders take `&mut self`, so a single
/// instance cannot be decoded into from two threads at once.
///
/// # Example
///
/// ```
/// use nulls::{NullInt32, Nullable};
///
/// let mut n = NullInt32::default();
/// assert!(!n.valid);
///
/// n.decode_json(b"42").unwrap();
/// assert_eq!(n, Nullable::new(42));
/// assert_eq!(n.encode_json().unwrap(), b"42");
///
/// n.decode_json(b"null").unwrap();
/// assert_eq!(n.encode_json().unwrap(), b"null");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

/// Conversion policy for one primitive kind.
///
/// Each kind decides how it parses and renders text, how it widens to and
/// narrows from the driver's native families, and how lenient its JSON
/// decoder is.
pub trait Primitive: Clone + Default + PartialEq + Sized {
    const KIND: PrimitiveKind;

    /// Converts a raw driver value. `Ok(None)` means absent.
    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError>;

    /// Widens to the driver's native family.
    fn to_driver(&self) -> DriverValue;

    fn to_dynamic(&self) -> DynamicValue;

    /// JSON literal for a present value.
    fn encode_json(&self) -> Result<Vec<u8>, NullError>;

    /// Decodes JSON bytes into `slot`, applying this kind's error policy.
    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError>;

    /// Decodes plain text into `slot`.
    fn decode_text(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        Self::decode_json(slot, text)
    }

    /// Element content and attribute text for a present value.
    fn to_xml_text(&self) -> Result<String, NullError>;

    /// Parses non-empty, non-`null` element or attribute text.
    fn parse_xml_text(text: &str) -> Result<Self, NullError>;

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error>;

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error>;
}

impl<T> Nullable<T> {
    /// A present value.
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Default> Nullable<T> {
    /// An absent value with a zero `value`.
    pub fn null() -> Self {
        Self::default()
    }
}

impl<T: Primitive> Nullable<T> {
    /// Kind-erased view: `None` when absent.
    pub fn to_dynamic(&self) -> Option<DynamicValue> {
        self.valid.then(|| self.value.to_dynamic())
    }

    /// JSON text: `null` when absent.
    pub fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        if !self.valid {
            return Ok(JSON_NULL.to_vec());
        }
        self.value.encode_json()
    }

    /// Replaces `self` with decoded JSON.
    ///
    /// Lenient kinds (bool, string) turn malformed input into an absent
    /// value; the others report it and leave `valid` false.
    pub fn decode_json(&mut self, text: &[u8]) -> Result<(), NullError> {
        T::decode_json(self, text)
    }

    /// Replaces `self` with decoded plain text.
    pub fn decode_text(&mut self, text: &[u8]) -> Result<(), NullError> {
        T::decode_text(self, text)
    }

    /// Writes `<start>value</start>`, or nothing at all when absent.
    pub fn encode_xml(
        &self,
        writer: &mut XmlWriter,
        start: &StartElement,
    ) -> Result<(), NullError> {
        if !self.valid {
            return Ok(());
        }
        writer.encode_element(start, &self.value.to_xml_text()?)
    }

    /// Replaces `self` with the text content of an element.
    ///
    /// Empty content and the text `null` decode as absent.
    pub fn decode_xml(&mut self, node: Node<'_, '_>) -> Result<(), NullError> {
        let text = xml::element_text(node)?;
        self.decode_markup_text(&text)
    }

    /// Decodes the first child element called `name`; absent when missing.
    pub fn decode_xml_child(&mut self, parent: Node<'_, '_>, name: &str) -> Result<(), NullError> {
        match xml::child_element(parent, name) {
            Some(child) => self.decode_xml(child),
            None => {
                self.valid = false;
                Ok(())
            }
        }
    }

    /// Attribute carrying the value, or [`XmlAttr::empty`] when absent.
    pub fn encode_xml_attr(&self, name: impl Into<XmlName>) -> Result<XmlAttr, NullError> {
        if !self.valid {
            return Ok(XmlAttr::empty());
        }
        Ok(XmlAttr::new(name, self.value.to_xml_text()?))
    }

    /// Replaces `self` with an attribute's value.
    ///
    /// Empty values and the text `null` decode as absent.
    pub fn decode_xml_attr(&mut self, attr: &XmlAttr) -> Result<(), NullError> {
        self.decode_markup_text(&attr.value)
    }

    /// Decodes attribute `name` of `node`; absent when missing.
    pub fn decode_xml_attr_of(&mut self, node: Node<'_, '_>, name: &str) -> Result<(), NullError> {
        match xml::attr_of(node, name) {
            Some(attr) => self.decode_xml_attr(&attr),
            None => {
                self.valid = false;
                Ok(())
            }
        }
    }

    fn decode_markup_text(&mut self, text: &str) -> Result<(), NullError> {
        self.valid = false;
        if text.is_empty() || text.as_bytes() == JSON_NULL {
            return Ok(());
        }
        self.value = T::parse_xml_text(text)?;
        self.valid = true;
        Ok(())
    }
}

impl<T: Primitive> Scanner for Nullable<T> {
    /// Driver null resets `value` to its zero value. On a conversion error
    /// `value` is left untouched and `valid` is false.
    fn scan(&mut self, raw: &DriverValue) -> Result<(), NullError> {
        match T::scan_driver(raw) {
            Ok(Some(value)) => {
                self.value = value;
                self.valid = true;
                Ok(())
            }
            Ok(None) => {
                self.value = T::default();
                self.valid = false;
                Ok(())
            }
            Err(err) => {
                self.valid = false;
                Err(err)
            }
        }
    }
}

impl<T: Primitive> Valuer for Nullable<T> {
    fn value(&self) -> Result<DriverValue, NullError> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }
        Ok(self.value.to_driver())
    }
}

impl<T> From<Option<T>> for Nullable<T>
where
    T: Default,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::default(),
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

/// Shared JSON decoder for the strict kinds.
///
/// `null` decodes as absent. Anything else must satisfy `parse`; on failure
/// `valid` is false, `value` is untouched and the error is returned.
pub(crate) fn decode_json_strict<T, F>(
    slot: &mut Nullable<T>,
    text: &[u8],
    parse: F,
) -> Result<(), NullError>
where
    T: Primitive,
    F: FnOnce(&str) -> Result<T, NullError>,
{
    slot.valid = false;
    if text == JSON_NULL {
        return Ok(());
    }
    let text = utf8_text(T::KIND, text)?;
    slot.value = parse(text)?;
    slot.valid = true;
    Ok(())
}

pub(crate) fn utf8_text(kind: PrimitiveKind, text: &[u8]) -> Result<&str, NullError> {
    std::str::from_utf8(text)
        .map_err(|_| NullError::syntax(kind, &String::from_utf8_lossy(text)))
}

/// Serializes a present value with `serde_json`.
pub(crate) fn json_bytes<T: serde::Serialize>(
    kind: PrimitiveKind,
    value: &T,
) -> Result<Vec<u8>, NullError> {
    serde_json::to_vec(value).map_err(|err| NullError::Unsupported {
        kind,
        detail: err.to_string(),
    })
}
