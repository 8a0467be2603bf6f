//! Nullable timestamps.
//!
//! Timestamps render as RFC 3339 with the fractional second trimmed of
//! trailing zeros and `Z` for a zero offset, in JSON (quoted), element
//! content and attributes alike. Driver scans accept only timestamp values:
//! anything else, driver null included, scans as absent without an error.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::driver::DriverValue;
use crate::dynamic::DynamicValue;
use crate::error::{NullError, PrimitiveKind};
use crate::nullable::{json_bytes, Nullable, Primitive, JSON_NULL};

/// RFC 3339 text with up to nine fractional digits, trailing zeros trimmed.
pub fn format_rfc3339_nano(t: &DateTime<FixedOffset>) -> String {
    let mut out = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    let nanos = t.nanosecond() % 1_000_000_000;
    if nanos != 0 {
        let digits = format!("{nanos:09}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    let offset = t.offset().local_minus_utc();
    if offset == 0 {
        out.push('Z');
    } else {
        let sign = if offset < 0 { '-' } else { '+' };
        let minutes = offset.unsigned_abs() / 60;
        out.push_str(&format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60));
    }
    out
}

/// Parses RFC 3339 text, optionally wrapped in JSON string quotes.
pub fn parse_rfc3339(text: &str) -> Result<DateTime<FixedOffset>, NullError> {
    let bare = if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    };
    DateTime::parse_from_rfc3339(bare).map_err(|err| NullError::Timestamp {
        text: text.to_owned(),
        reason: err.to_string(),
    })
}

/// RFC 3339 has four year digits; JSON and markup text refuse anything wider.
fn check_year(t: &DateTime<FixedOffset>) -> Result<(), NullError> {
    if !(0..=9999).contains(&t.year()) {
        return Err(NullError::Unsupported {
            kind: PrimitiveKind::Time,
            detail: format!("year {} outside of range [0,9999]", t.year()),
        });
    }
    Ok(())
}

impl Primitive for DateTime<FixedOffset> {
    const KIND: PrimitiveKind = PrimitiveKind::Time;

    fn scan_driver(raw: &DriverValue) -> Result<Option<Self>, NullError> {
        match raw {
            DriverValue::Timestamp(t) => Ok(Some(*t)),
            DriverValue::Null => Ok(None),
            other => {
                log::debug!("time scan got {}, treating as null", other.type_name());
                Ok(None)
            }
        }
    }

    fn to_driver(&self) -> DriverValue {
        DriverValue::Timestamp(*self)
    }

    fn to_dynamic(&self) -> DynamicValue {
        DynamicValue::Time(*self)
    }

    fn encode_json(&self) -> Result<Vec<u8>, NullError> {
        check_year(self)?;
        json_bytes(Self::KIND, &format_rfc3339_nano(self))
    }

    fn decode_json(slot: &mut Nullable<Self>, text: &[u8]) -> Result<(), NullError> {
        slot.valid = false;
        if text.is_empty() || text == JSON_NULL {
            return Ok(());
        }
        let quoted = serde_json::from_slice::<String>(text).map_err(|_| NullError::Timestamp {
            text: String::from_utf8_lossy(text).into_owned(),
            reason: "input is not a JSON string".to_owned(),
        })?;
        slot.value = parse_rfc3339(&quoted)?;
        slot.valid = true;
        Ok(())
    }

    fn to_xml_text(&self) -> Result<String, NullError> {
        check_year(self)?;
        Ok(format_rfc3339_nano(self))
    }

    fn parse_xml_text(text: &str) -> Result<Self, NullError> {
        parse_rfc3339(text)
    }

    fn serialize_present<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_rfc3339_nano(self))
    }

    fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Self>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|text| parse_rfc3339(&text).map_err(de::Error::custom))
            .transpose()
    }
}
