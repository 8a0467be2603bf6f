//! [`Primitive`](crate::Primitive) policies, one module per kind.

mod boolean;
mod float32;
mod int;
mod int32;
mod int64;
mod string;
pub(crate) mod time;
mod uint32;
