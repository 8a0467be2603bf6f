//! Nullable 64-bit signed integers, the driver's native integer family.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_i64, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{decode_json_strict, json_bytes, Nullable, Primitive};
use crate::parse::parse_int;

impl Primitive for i64 {
    const KIND: PrimitiveKind = PrimitiveKind::Int64;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        scan_i64(Self::KIND, raw)
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Int64(*self)
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Int64(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        decode_json_strict(slot, text, |text| parse_int::<i64>(Self::KIND, text))
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(self.to_string())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        parse_int::<i64>(Self::KIND, text)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<i64>::deserialize(deserializer)
    }
}
