//! Nullable platform-width signed integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::driver::{scan_i64, DriverValue};
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{decode_json_strict, json_bytes, Nullable, Primitive};
use crate::parse::parse_int;

impl Primitive for isize {
    const KIND: PrimitiveKind = PrimitiveKind::Int;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        Ok(scan_i64(Self::KIND, raw)?.map(|wide| wide as isize))
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Int64(*self as i64)
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Int(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        json_bytes(Self::KIND, self)
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        decode_json_strict(slot, text, |text| parse_int::<isize>(Self::KIND, text))
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        Ok(self.to_string())
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        parse_int::<isize>(Self::KIND, text)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<isize>::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::xml::{Document, XmlAttr};
    use crate::{NullInt, Scanner, Valuer};

    use super::*;

    #[test]
    fn json_decode_is_strict() {
        let mut n = NullInt::default();
        n.decode_json(b"123").unwrap();
        assert_eq!(n, NullInt::new(123));

        let err = n.decode_json(b"12x").unwrap_err();
        assert!(matches!(err, NullError::Syntax { kind: PrimitiveKind::Int, .. }));
        assert!(!n.valid);

        n.decode_json(b"null").unwrap();
        assert!(!n.valid);
    }

    #[test]
    fn platform_bound_applies_to_every_path() {
        let max = isize::MAX.to_string();
        let mut n = NullInt::default();
        n.decode_json(max.as_bytes()).unwrap();
        assert_eq!(n, NullInt::new(isize::MAX));

        let over = format!("{max}0");
        assert!(matches!(
            n.decode_xml_attr(&XmlAttr::new("val", over.as_str())),
            Err(NullError::Range { .. })
        ));
    }

    #[test]
    fn markup_and_driver() {
        let doc = Document::parse("<test val=\"-4\"><val>null</val></test>").unwrap();
        let root = doc.root_element();
        let mut n = NullInt::default();
        n.decode_xml_attr_of(root, "val").unwrap();
        assert_eq!(n, NullInt::new(-4));
        n.decode_xml_child(root, "val").unwrap();
        assert!(!n.valid);

        assert_eq!(NullInt::new(-4).value().unwrap(), DriverValue::Int64(-4));
        n.scan(&DriverValue::Float64(10.0)).unwrap();
        assert_eq!(n, NullInt::new(10));
        assert_eq!(n.encode_xml_attr("n").unwrap(), XmlAttr::new("n", "10"));
    }
}
