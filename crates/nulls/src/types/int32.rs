//! Nullable 32-bit signed integers.
//!
//! JSON and text decoding parse within the 32-bit bound. Markup decoding
//! parses within the platform word and then truncates to 32 bits.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_i64, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{decode_json_strict, json_bytes, Nullable, Primitive};
use crate::parse::parse_int;

impl Primitive for i32 {
    const KIND: PrimitiveKind = PrimitiveKind::Int32;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        Ok(scan_i64(Self::KIND, raw)?.map(|wide| wide as i32))
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Int64(i64::from(*self))
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Int32(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        decode_json_strict(slot, text, |text| parse_int::<i32>(Self::KIND, text))
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(self.to_string())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        let wide = parse_int::<isize>(Self::KIND, text)?;
        let narrowed = wide as i32;
        if narrowed as isize != wide {
            log::trace!("int32 markup value {wide} truncated to {narrowed}");
        }
        Ok(narrowed)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<i32>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::xml::{Document, StartElement, XmlAttr, XmlWriter};
    use crate::{NullInt32, Scanner, Valuer};

    use super::*;

    #[test]
    fn json_overflow_is_reported() {
        let mut n = NullInt32::new(3);
        let err = n.decode_json(b"99999999999").unwrap_err();
        assert!(matches!(
            err,
            NullError::Range {
                kind: PrimitiveKind::Int32,
                ..
            }
        ));
        assert!(!n.valid);
        assert_eq!(n.value, 3);
    }

    #[test]
    fn json_decode() {
        let mut n = NullInt32::default();
        n.decode_json(b"-2147483648").unwrap();
        assert_eq!(n, NullInt32::new(i32::MIN));

        n.decode_json(b"null").unwrap();
        assert!(!n.valid);

        assert!(n.decode_json(b"\"12\"").is_err());
        assert!(n.decode_json(b"1.0").is_err());
        assert!(!n.valid);

        n.decode_text(b"77").unwrap();
        assert_eq!(n, NullInt32::new(77));
    }

    #[test]
    fn markup_decode_truncates_past_32_bits() {
        let mut n = NullInt32::default();
        n.decode_xml_attr(&XmlAttr::new("val", "4294967297")).unwrap();
        assert_eq!(n, NullInt32::new(1));

        let doc = Document::parse("<test><val>-15</val><e></e></test>").unwrap();
        let root = doc.root_element();
        n.decode_xml_child(root, "val").unwrap();
        assert_eq!(n, NullInt32::new(-15));
        n.decode_xml_child(root, "e").unwrap();
        assert!(!n.valid);
    }

    #[test]
    fn markup_encode() {
        let mut writer = XmlWriter::new();
        NullInt32::new(-8)
            .encode_xml(&mut writer, &StartElement::new("val"))
            .unwrap();
        assert_eq!(writer.flush(), "<val>-8</val>");
        assert_eq!(
            NullInt32::new(12).encode_xml_attr("val").unwrap(),
            XmlAttr::new("val", "12")
        );
    }

    #[test]
    fn driver_widens_and_narrows() {
        assert_eq!(NullInt32::new(7).value().unwrap(), DriverValue::Int64(7));

        let mut n = NullInt32::default();
        n.scan(&DriverValue::Int64(5_000_000_000)).unwrap();
        assert_eq!(n, NullInt32::new(5_000_000_000_i64 as i32));

        n.scan(&DriverValue::String("12".into())).unwrap();
        assert_eq!(n, NullInt32::new(12));
        assert_eq!(n.to_dynamic(), Some(DynamicValue::Int32(12)));
    }
}
