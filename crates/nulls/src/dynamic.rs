//! Kind-erased view of a nullable primitive.

use chrono::{DateTime, FixedOffset};

use crate::error::PrimitiveKind;

/// A present value of any supported primitive kind.
///
/// Absence is expressed by wrapping this in `Option`, see
/// [`Nullable::to_dynamic`](crate::Nullable::to_dynamic).
#[derive(Debug, Clone, PartialEq)]
pub enum DynamicValue {
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Int(isize),
    UInt32(u32),
    Float32(f32),
    String(String),
    Time(DateTime<FixedOffset>),
}

impl DynamicValue {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            DynamicValue::Bool(_) => PrimitiveKind::Bool,
            DynamicValue::Int32(_) => PrimitiveKind::Int32,
            DynamicValue::Int64(_) => PrimitiveKind::Int64,
            DynamicValue::Int(_) => PrimitiveKind::Int,
            DynamicValue::UInt32(_) => PrimitiveKind::UInt32,
            DynamicValue::Float32(_) => PrimitiveKind::Float32,
            DynamicValue::String(_) => PrimitiveKind::String,
            DynamicValue::Time(_) => PrimitiveKind::Time,
        }
    }
}
