use std::num::{ParseFloatError, ParseIntError};
use std::string::FromUtf8Error;

/// Why a single token did not convert to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    #[error("float literal out of range for the target width")]
    FloatOutOfRange,

    #[error("invalid boolean literal")]
    Bool,

    #[error("unsigned integer must not carry a sign")]
    UnsignedSign,
}

/// Errors reported by the fallible accessors (`try_get`, `require`, ...).
///
/// Messages carry the variable name but never its value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("environment variable {key} is not set")]
    Missing { key: String },

    #[error("environment variable {key} is not valid unicode")]
    NotUnicode { key: String },

    #[error("environment variable {key}: {source}")]
    Invalid { key: String, source: ParseError },

    #[error("environment variable {key}, segment {index}: {source}")]
    InvalidSegment {
        key: String,
        index: usize,
        source: ParseError,
    },

    #[error("environment variable {key} is not valid base64")]
    Base64 {
        key: String,
        source: base64::DecodeError,
    },

    #[error("environment variable {key} does not decode to utf-8")]
    Utf8 { key: String, source: FromUtf8Error },
}

impl EnvError {
    /// Name of the variable the error is about.
    pub fn key(&self) -> &str {
        match self {
            EnvError::Missing { key }
            | EnvError::NotUnicode { key }
            | EnvError::Invalid { key, .. }
            | EnvError::InvalidSegment { key, .. }
            | EnvError::Base64 { key, .. }
            | EnvError::Utf8 { key, .. } => key,
        }
    }
}

pub type EnvResult<T> = Result<T, EnvError>;
