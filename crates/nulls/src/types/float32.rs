//! Nullable 32-bit floats.
//!
//! JSON uses `serde_json`'s shortest round-trip form, which may switch to
//! exponent notation; markup text is always fixed notation. Non-finite
//! values have no JSON literal and fail to encode.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_f64, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{decode_json_strict, json_bytes, Nullable, Primitive};
use crate::parse::{format_f32, parse_f32};

impl Primitive for f32 {
    const KIND: PrimitiveKind = PrimitiveKind::Float32;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        Ok(scan_f64(Self::KIND, raw)?.map(|wide| wide as f32))
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Float64(f64::from(*self))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Float32(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        if !self.is_finite() {
            return Err(NullError::Unsupported {
                kind: Self::KIND,
                detail: format_f32(*self),
            });
        }
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        decode_json_strict(slot, text, |text| parse_f32(Self::KIND, text))
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(format_f32(*self))
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        parse_f32(Self::KIND, text)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<f32>::deserialize(deserializer)
    }
}
