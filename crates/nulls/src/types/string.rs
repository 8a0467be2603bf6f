//! Nullable strings.
//!
//! JSON decoding is lenient: anything that is not a JSON string decodes as
//! absent without an error. Plain-text decoding takes the bytes verbatim.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_string, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{json_bytes, utf8_text, Nullable, Primitive, JSON_NULL};

impl Primitive for String {
    const KIND: PrimitiveKind = PrimitiveKind::String;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        scan_string(raw)
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::String(self.clone())
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::String(self.clone())
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        slot.valid = false;
        if text == JSON_NULL {
            return Ok(());
        }
        match serde_json::from_slice::<String>(text) {
            Ok(value) => *slot = Nullable::new(value),
            Err(err) => log::debug!("string is not a JSON string, treating as null: {err}"),
        }
        Ok(())
    }

    fn decode_text(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        slot.valid = false;
        if text == JSON_NULL {
            return Ok(());
        }
        slot.value = utf8_text(Self::KIND, text)?.to_owned();
        slot.valid = true;
        Ok(())
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(self.clone())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        Ok(text.to_owned())
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<String>::deserialize(deserializer)
    }
}
