//! Error type shared by every nullable primitive.

use std::fmt;

use thiserror::Error;

/// The primitive family a [`Nullable`](crate::Nullable) wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Int32,
    Int64,
    Int,
    UInt32,
    Float32,
    String,
    Time,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Int32 => "int32",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::Int => "int",
            PrimitiveKind::UInt32 => "uint32",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::String => "string",
            PrimitiveKind::Time => "time",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while converting a nullable primitive between representations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NullError {
    #[error("parsing {kind} from {text:?}: invalid syntax")]
    Syntax { kind: PrimitiveKind, text: String },
    #[error("parsing {kind} from {text:?}: value out of range")]
    Range { kind: PrimitiveKind, text: String },
    #[error("parsing time {text:?}: {reason}")]
    Timestamp { text: String, reason: String },
    #[error("converting driver value of type {from} to {kind}: {detail}")]
    Convert {
        kind: PrimitiveKind,
        from: &'static str,
        detail: String,
    },
    #[error("unsupported {kind} value: {detail}")]
    Unsupported { kind: PrimitiveKind, detail: String },
    #[error("xml node is not an element")]
    NotAnElement,
    #[error("xml parse error: {0}")]
    Xml(String),
}

impl NullError {
    pub(crate) fn syntax(kind: PrimitiveKind, text: &str) -> Self {
        NullError::Syntax {
            kind,
            text: text.to_owned(),
        }
    }

    pub(crate) fn range(kind: PrimitiveKind, text: &str) -> Self {
        NullError::Range {
            kind,
            text: text.to_owned(),
        }
    }

    /// Whether this error came from malformed or out-of-range text.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            NullError::Syntax { .. } | NullError::Range { .. } | NullError::Timestamp { .. }
        )
    }
}

impl From<roxmltree::Error> for NullError {
    fn from(err: roxmltree::Error) -> Self {
        NullError::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_kind_and_input() {
        let err = NullError::range(PrimitiveKind::Int32, "99999999999");
        assert_eq!(
            err.to_string(),
            "parsing int32 from \"99999999999\": value out of range"
        );
        assert!(err.is_parse());
        assert!(!NullError::NotAnElement.is_parse());
    }
}
