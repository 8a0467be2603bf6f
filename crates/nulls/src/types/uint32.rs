//! Nullable 32-bit unsigned integers.
//!
//! JSON and text decoding parse within the signed 32-bit bound and then
//! reinterpret, so `-1` decodes as `4294967295` while `4294967295` itself is
//! out of range. Markup decoding parses within the platform word and
//! truncates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_i64, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{decode_json_strict, json_bytes, Nullable, Primitive};
use crate::parse::parse_int;

impl Primitive for u32 {
    const KIND: PrimitiveKind = PrimitiveKind::UInt32;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        Ok(scan_i64(Self::KIND, raw)?.map(|wide| wide as u32))
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Int64(i64::from(*self))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::UInt32(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        decode_json_strict(slot, text, |text| {
            parse_int::<i32>(Self::KIND, text).map(|signed| signed as u32)
        })
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(self.to_string())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        let wide = parse_int::<isize>(Self::KIND, text)?;
        let narrowed = wide as u32;
        if narrowed as isize != wide {
            log::trace!("uint32 markup value {wide} truncated to {narrowed}");
        }
        Ok(narrowed)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<u32>::deserialize(deserializer)
    }
}
