//! Property tests: present values survive every protocol, absent values
//! stay absent.

use nulls::xml::{Document, StartElement, XmlWriter};
use nulls::{
    NullFloat32, NullInt32, NullInt64, NullString, NullUInt32, Nullable, Primitive, Scanner,
    Valuer,
};
use proptest::prelude::*;

fn element_round_trip<T: Primitive>(n: &Nullable<T>) -> Nullable<T> {
    let mut writer = XmlWriter::new();
    let outer = StartElement::new("row").with_attr(n.encode_xml_attr("a").unwrap());
    writer.write_start(&outer).unwrap();
    n.encode_xml(&mut writer, &StartElement::new("e")).unwrap();
    writer.write_end(&outer.name).unwrap();
    let markup = writer.flush();

    let doc = Document::parse(&markup).unwrap();
    let mut from_element = Nullable::<T>::default();
    from_element.decode_xml_child(doc.root_element(), "e").unwrap();
    let mut from_attr = Nullable::<T>::default();
    from_attr.decode_xml_attr_of(doc.root_element(), "a").unwrap();
    assert!(from_element == from_attr);
    from_element
}

fn json_round_trip<T: Primitive>(n: &Nullable<T>) -> Nullable<T> {
    let mut back = Nullable::<T>::default();
    back.decode_json(&n.encode_json().unwrap()).unwrap();
    back
}

fn driver_round_trip<T: Primitive>(n: &Nullable<T>) -> Nullable<T> {
    let mut back = Nullable::<T>::default();
    back.scan(&n.value().unwrap()).unwrap();
    back
}

fn xml_safe(ch: char) -> char {
    match ch {
        '\t' | '\n' | '\r' => ch,
        '\u{0}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}' => '\u{FFFD}',
        _ => ch,
    }
}

proptest! {
    #[test]
    fn int32_round_trips(v in any::<i32>(), valid in any::<bool>()) {
        let n = if valid { NullInt32::new(v) } else { NullInt32::default() };
        prop_assert_eq!(json_round_trip(&n), n);
        prop_assert_eq!(element_round_trip(&n), n);
        prop_assert_eq!(driver_round_trip(&n), n);
    }

    #[test]
    fn int64_round_trips(v in any::<i64>()) {
        let n = NullInt64::new(v);
        prop_assert_eq!(json_round_trip(&n), n);
        prop_assert_eq!(element_round_trip(&n), n);
        prop_assert_eq!(driver_round_trip(&n), n);
    }

    #[test]
    fn uint32_markup_and_driver_round_trip(v in any::<u32>()) {
        let n = NullUInt32::new(v);
        prop_assert_eq!(element_round_trip(&n), n);
        prop_assert_eq!(driver_round_trip(&n), n);
    }

    #[test]
    fn float32_round_trips(v in proptest::num::f32::NORMAL | proptest::num::f32::ZERO) {
        let n = NullFloat32::new(v);
        prop_assert_eq!(json_round_trip(&n), n);
        prop_assert_eq!(element_round_trip(&n), n);
        prop_assert_eq!(driver_round_trip(&n), n);
    }

    #[test]
    fn string_round_trips(s in "[a-zA-Z0-9 <>&\"'.,;:!?\\x00-\\x1f\u{FFFE}\u{FFFF}-]{1,24}") {
        prop_assume!(s != "null");
        let n = NullString::new(s);
        prop_assert_eq!(json_round_trip(&n), n.clone());
        prop_assert_eq!(driver_round_trip(&n), n.clone());

        let markup = NullString::new(n.value.chars().map(xml_safe).collect());
        prop_assert_eq!(element_round_trip(&n), markup);
    }

    #[test]
    fn garbage_never_leaves_a_strict_kind_valid(text in "[^0-9]{1,8}") {
        prop_assume!(text != "null");
        let mut n = NullInt64::new(1);
        let result = n.decode_json(text.as_bytes());
        prop_assert!(result.is_err());
        prop_assert!(!n.valid);
    }
}
