//! # Error Types
//!
//! Codec errors shared by every crate that decodes wire records.

use thiserror::Error;

/// Errors raised while turning bytes into wire records or back.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Bytes do not describe a well-formed record of the expected shape.
    #[error("Malformed {record}: {reason}")]
    Decode {
        record: &'static str,
        reason: String,
    },

    /// The encoded record, or a length prefix inside it, exceeds the limit.
    #[error("{record} exceeds decode limit of {limit} bytes")]
    SizeLimit { record: &'static str, limit: u64 },

    /// A record could not be serialized.
    #[error("Failed to encode {record}: {reason}")]
    Encode {
        record: &'static str,
        reason: String,
    },
}

impl CodecError {
    /// Name of the record the error refers to.
    pub fn record(&self) -> &'static str {
        match self {
            CodecError::Decode { record, .. }
            | CodecError::SizeLimit { record, .. }
            | CodecError::Encode { record, .. } => record,
        }
    }
}
