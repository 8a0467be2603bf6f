//! Text parsing and formatting shared by the numeric and boolean kinds.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::{NullError, PrimitiveKind};

/// Parses base-10 integer text bounded by `I`'s width.
///
/// The bound is chosen by the caller, not by the target kind: narrow kinds
/// parse with one bound and cast afterwards.
pub(crate) fn parse_int<I>(kind: PrimitiveKind, text: &str) -> Result<I, NullError>
where
    I: FromStr<Err = ParseIntError>,
{
    text.parse::<I>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => NullError::range(kind, text),
        _ => NullError::syntax(kind, text),
    })
}

/// Parses float text at 32-bit precision.
///
/// Finite literals that overflow `f32` are a range error; explicit
/// infinity and NaN literals are accepted.
pub(crate) fn parse_f32(kind: PrimitiveKind, text: &str) -> Result<f32, NullError> {
    let parsed = text
        .parse::<f32>()
        .map_err(|_| NullError::syntax(kind, text))?;
    if parsed.is_infinite() && !is_infinity_literal(text) {
        return Err(NullError::range(kind, text));
    }
    Ok(parsed)
}

/// Parses float text at 64-bit precision.
pub(crate) fn parse_f64(kind: PrimitiveKind, text: &str) -> Result<f64, NullError> {
    let parsed = text
        .parse::<f64>()
        .map_err(|_| NullError::syntax(kind, text))?;
    if parsed.is_infinite() && !is_infinity_literal(text) {
        return Err(NullError::range(kind, text));
    }
    Ok(parsed)
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Strict boolean parsing used by the markup and driver paths.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub(crate) fn parse_bool_strict(text: &str) -> Result<bool, NullError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(NullError::syntax(PrimitiveKind::Bool, text)),
    }
}

/// Shortest fixed-notation text for an `f32`, never using an exponent.
pub(crate) fn format_f32(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_owned();
    }
    value.to_string()
}
