//! Errors produced while lexing, parsing or expanding ABI type signatures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbiError {
    #[error("invalid character '{found}' at offset {offset}")]
    Lex { found: char, offset: usize },

    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { found: String, expected: String },

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("malformed type '{0}', expected letters followed by an optional size")]
    MalformedType(String),

    #[error("tuple expects at least one component")]
    TupleArity,

    #[error("invalid width for '{ty}': {reason}")]
    BadWidth { ty: String, reason: String },

    #[error("invalid array size '{found}': {reason}")]
    BadArraySize { found: String, reason: String },

    #[error("tuple argument '{argument}' expects components but none found")]
    MissingComponents { argument: String },

    #[error("type nesting exceeds the limit of {limit}")]
    TooDeep { limit: usize },

    #[error("failed to read argument JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AbiError {
    pub(crate) fn bad_width(ty: impl Into<String>, reason: impl Into<String>) -> Self {
        AbiError::BadWidth {
            ty: ty.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn bad_array_size(found: impl Into<String>, reason: impl Into<String>) -> Self {
        AbiError::BadArraySize {
            found: found.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AbiError>;
