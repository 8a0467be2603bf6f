//! Relational driver value protocol.
//!
//! A storage layer hands raw column values to [`Scanner::scan`] as a
//! [`DriverValue`] and collects bind parameters from [`Valuer::value`]. The
//! crate never talks to a database itself; see the `sqlite` feature for a
//! bridge onto `rusqlite`.
//!
//! The `scan_*` helpers implement conversion into the driver's native
//! families (bool, int64, float64, string). Narrow kinds go through the
//! nearest native family and cast afterwards. Floats that have to become
//! text are written in plain decimal notation, never with an exponent.

use chrono::{DateTime, FixedOffset};

use crate::error::{NullError, PrimitiveKind};
use crate::parse::{parse_bool_strict, parse_f64, parse_int};
use crate::types::time::format_rfc3339_nano;

/// A value as exchanged with a relational driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL, also used as the absence marker on output.
    Null,
    Bool(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<FixedOffset>),
}

impl DriverValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Name of the carried family, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int64(_) => "int64",
            DriverValue::Float64(_) => "float64",
            DriverValue::String(_) => "string",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Timestamp(_) => "timestamp",
        }
    }
}

/// Inbound half of the driver protocol.
pub trait Scanner {
    /// Replaces `self` with the content of a raw driver value.
    fn scan(&mut self, raw: &DriverValue) -> Result<(), NullError>;
}

/// Outbound half of the driver protocol.
pub trait Valuer {
    /// Returns the driver representation, [`DriverValue::Null`] when absent.
    fn value(&self) -> Result<DriverValue, NullError>;
}

fn convert_error(
    kind: PrimitiveKind,
    raw: &DriverValue,
    detail: impl Into<String>,
) -> NullError {
    NullError::Convert {
        kind,
        from: raw.type_name(),
        detail: detail.into(),
    }
}

fn bytes_as_str<'a>(
    kind: PrimitiveKind,
    raw: &DriverValue,
    bytes: &'a [u8],
) -> Result<&'a str, NullError> {
    std::str::from_utf8(bytes).map_err(|err| convert_error(kind, raw, err.to_string()))
}

/// Converts a non-null driver value into a bool.
pub fn scan_bool(raw: &DriverValue) -> Result<Option<bool>, NullError> {
    let kind = PrimitiveKind::Bool;
    match raw {
        DriverValue::Null => Ok(None),
        DriverValue::Bool(b) => Ok(Some(*b)),
        DriverValue::Int64(1) => Ok(Some(true)),
        DriverValue::Int64(0) => Ok(Some(false)),
        DriverValue::Int64(i) => Err(convert_error(
            kind,
            raw,
            format!("couldn't convert {i} into type bool"),
        )),
        DriverValue::String(s) => bool_from_text(raw, s).map(Some),
        DriverValue::Bytes(b) => bool_from_text(raw, bytes_as_str(kind, raw, b)?).map(Some),
        DriverValue::Float64(_) | DriverValue::Timestamp(_) => {
            Err(convert_error(kind, raw, "unsupported source type"))
        }
    }
}

fn bool_from_text(raw: &DriverValue, text: &str) -> Result<bool, NullError> {
    parse_bool_strict(text).map_err(|_| {
        convert_error(
            PrimitiveKind::Bool,
            raw,
            format!("couldn't convert {text:?} into type bool"),
        )
    })
}

/// Converts a non-null driver value into an int64.
///
/// Floats are accepted only when their shortest text is an integer literal.
pub fn scan_i64(kind: PrimitiveKind, raw: &DriverValue) -> Result<Option<i64>, NullError> {
    let text = match raw {
        DriverValue::Null => return Ok(None),
        DriverValue::Int64(i) => return Ok(Some(*i)),
        DriverValue::Float64(f) => f.to_string(),
        DriverValue::Bool(b) => b.to_string(),
        DriverValue::String(s) => s.clone(),
        DriverValue::Bytes(b) => bytes_as_str(kind, raw, b)?.to_owned(),
        DriverValue::Timestamp(t) => format_rfc3339_nano(t),
    };
    parse_int::<i64>(kind, &text)
        .map(Some)
        .map_err(|err| convert_error(kind, raw, err.to_string()))
}

/// Converts a non-null driver value into a float64.
pub fn scan_f64(kind: PrimitiveKind, raw: &DriverValue) -> Result<Option<f64>, NullError> {
    let text = match raw {
        DriverValue::Null => return Ok(None),
        DriverValue::Float64(f) => return Ok(Some(*f)),
        DriverValue::Int64(i) => return Ok(Some(*i as f64)),
        DriverValue::Bool(b) => b.to_string(),
        DriverValue::String(s) => s.clone(),
        DriverValue::Bytes(b) => bytes_as_str(kind, raw, b)?.to_owned(),
        DriverValue::Timestamp(t) => format_rfc3339_nano(t),
    };
    parse_f64(kind, &text)
        .map(Some)
        .map_err(|err| convert_error(kind, raw, err.to_string()))
}

/// Converts a non-null driver value into a string.
pub fn scan_string(raw: &DriverValue) -> Result<Option<String>, NullError> {
    match raw {
        DriverValue::Null => Ok(None),
        DriverValue::String(s) => Ok(Some(s.clone())),
        DriverValue::Bytes(b) => {
            Ok(Some(bytes_as_str(PrimitiveKind::String, raw, b)?.to_owned()))
        }
        DriverValue::Int64(i) => Ok(Some(i.to_string())),
        DriverValue::Float64(f) => Ok(Some(f.to_string())),
        DriverValue::Bool(b) => Ok(Some(b.to_string())),
        DriverValue::Timestamp(t) => Ok(Some(format_rfc3339_nano(t))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversions() {
        assert_eq!(scan_bool(&DriverValue::Null).unwrap(), None);
        assert_eq!(scan_bool(&DriverValue::Int64(1)).unwrap(), Some(true));
        assert_eq!(scan_bool(&DriverValue::Int64(0)).unwrap(), Some(false));
        assert_eq!(
            scan_bool(&DriverValue::Bytes(b"TRUE".to_vec())).unwrap(),
            Some(true)
        );
        assert!(matches!(
            scan_bool(&DriverValue::Int64(2)),
            Err(NullError::Convert { from: "int64", .. })
        ));
        assert!(scan_bool(&DriverValue::Float64(1.0)).is_err());
    }

    #[test]
    fn int64_conversions() {
        let kind = PrimitiveKind::Int64;
        assert_eq!(scan_i64(kind, &DriverValue::Int64(-9)).unwrap(), Some(-9));
        assert_eq!(scan_i64(kind, &DriverValue::Float64(2.0)).unwrap(), Some(2));
        assert_eq!(
            scan_i64(kind, &DriverValue::String("123".into())).unwrap(),
            Some(123)
        );
        assert!(scan_i64(kind, &DriverValue::Float64(2.5)).is_err());
        assert!(scan_i64(kind, &DriverValue::Bool(true)).is_err());
    }

    #[test]
    fn float64_and_string_conversions() {
        let kind = PrimitiveKind::Float32;
        assert_eq!(scan_f64(kind, &DriverValue::Int64(3)).unwrap(), Some(3.0));
        assert_eq!(
            scan_f64(kind, &DriverValue::Bytes(b"1.5".to_vec())).unwrap(),
            Some(1.5)
        );
        assert!(scan_f64(kind, &DriverValue::Bool(false)).is_err());

        assert_eq!(
            scan_string(&DriverValue::Int64(42)).unwrap().as_deref(),
            Some("42")
        );
        assert_eq!(
            scan_string(&DriverValue::Bool(true)).unwrap().as_deref(),
            Some("true")
        );
        assert!(scan_string(&DriverValue::Bytes(vec![0xff, 0xfe])).is_err());
    }

    #[test]
    fn floats_render_in_plain_notation() {
        assert_eq!(
            scan_string(&DriverValue::Float64(1e21)).unwrap().as_deref(),
            Some("1000000000000000000000")
        );
        assert_eq!(
            scan_string(&DriverValue::Float64(2.5e-7)).unwrap().as_deref(),
            Some("0.00000025")
        );
        assert!(matches!(
            scan_i64(PrimitiveKind::Int64, &DriverValue::Float64(1e21)),
            Err(NullError::Convert { from: "float64", .. })
        ));
        assert_eq!(
            scan_i64(PrimitiveKind::Int64, &DriverValue::Float64(1e15)).unwrap(),
            Some(1_000_000_000_000_000)
        );
    }
}
