//! Nullable booleans.
//!
//! JSON decoding is lenient: `true`/`t` and `false`/`f` are recognised and
//! anything else, `null` included, decodes as absent without an error. The
//! markup paths parse strictly and report unknown text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_bool, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{Nullable, Primitive};
use crate::parse::parse_bool_strict;

impl Primitive for bool {
    const KIND: PrimitiveKind = PrimitiveKind::Bool;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        scan_bool(raw)
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Bool(*self)
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Bool(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        Ok(if *self { b"true".to_vec() } else { b"false".to_vec() })
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        match text {
            b"true" | b"t" => *slot = Nullable::new(true),
            b"false" | b"f" => *slot = Nullable::new(false),
            _ => {
                if text != b"null" {
                    log::debug!(
                        "unrecognised bool literal {:?}, treating as null",
                        String::from_utf8_lossy(text)
                    );
                }
                *slot = Nullable::null();
            }
        }
        Ok(())
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        let text = if *self { "true" } else { "false" };
        Ok(text.to_owned())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        parse_bool_strict(text)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<bool>::deserialize(deserializer)
    }
}
