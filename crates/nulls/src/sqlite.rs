//! `rusqlite` bridge for the driver protocol.
//!
//! SQLite has no boolean or timestamp storage class: booleans are stored as
//! integers and timestamps as RFC 3339 text. Reading a timestamp column
//! turns parseable text back into [`DriverValue::Timestamp`] before the
//! scan.

use rusqlite::types::{
    FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef,
};

use crate::driver::{DriverValue, Scanner, Valuer};
use crate::error::PrimitiveKind;
use crate::nullable::{Nullable, Primitive};
use crate::types::time::{format_rfc3339_nano, parse_rfc3339};

impl From<DriverValue> for Value {
    fn from(value: DriverValue) -> Self {
        match value {
            DriverValue::Null => Value::Null,
            DriverValue::Bool(b) => Value::Integer(i64::from(b)),
            DriverValue::Int64(i) => Value::Integer(i),
            DriverValue::Float64(f) => Value::Real(f),
            DriverValue::String(s) => Value::Text(s),
            DriverValue::Bytes(b) => Value::Blob(b),
            DriverValue::Timestamp(t) => Value::Text(format_rfc3339_nano(&t)),
        }
    }
}

/// Converts a column value, reading text as a timestamp when `kind` asks for one.
pub fn driver_value_from_sqlite(
    value: ValueRef<'_>,
    kind: PrimitiveKind,
) -> FromSqlResult<DriverValue> {
    Ok(match value {
        ValueRef::Null => DriverValue::Null,
        ValueRef::Integer(i) => DriverValue::Int64(i),
        ValueRef::Real(f) => DriverValue::Float64(f),
        ValueRef::Text(bytes) => {
            let text =
                std::str::from_utf8(bytes).map_err(|err| FromSqlError::Other(Box::new(err)))?;
            match kind {
                PrimitiveKind::Time => match parse_rfc3339(text) {
                    Ok(t) => DriverValue::Timestamp(t),
                    Err(_) => DriverValue::String(text.to_owned()),
                },
                _ => DriverValue::String(text.to_owned()),
            }
        }
        ValueRef::Blob(bytes) => DriverValue::Bytes(bytes.to_vec()),
    })
}

impl<T: Primitive> ToSql for Nullable<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = self
            .value()
            .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
        Ok(ToSqlOutput::Owned(value.into()))
    }
}

impl<T: Primitive> FromSql for Nullable<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let raw = driver_value_from_sqlite(value, T::KIND)?;
        let mut out = Nullable::default();
        out.scan(&raw).map_err(|err| FromSqlError::Other(Box::new(err)))?;
        Ok(out)
    }
}
