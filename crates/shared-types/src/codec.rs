//! # Wire Codec
//!
//! Bounded bincode encoding for every wire record.
//!
//! ## Format
//!
//! - Fixed-width integers, little endian (bincode `with_fixint_encoding`)
//! - Length-prefixed byte strings and sequences (u64 prefix)
//! - Enum tags as u32 variant indices; unknown indices fail to decode
//! - Trailing bytes after a complete record are rejected
//!
//! The decode limit caps both the input length and the total bytes bincode
//! may consume, including allocations requested by length prefixes, so a
//! forged prefix cannot force a large allocation.

use crate::errors::CodecError;
use bincode::{ErrorKind, Options};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default upper bound for a single decoded message (16 MiB).
pub const DEFAULT_MAX_MESSAGE_BYTES: u64 = 16 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// A record that travels over the wire.
pub trait WireMessage: Serialize + DeserializeOwned {
    /// Record name used in error messages.
    const RECORD: &'static str;

    /// Decode with the default message limit.
    fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        Self::decode_with_limit(bytes, DEFAULT_MAX_MESSAGE_BYTES)
    }

    /// Decode, consuming at most `limit` bytes.
    fn decode_with_limit(bytes: &[u8], limit: u64) -> Result<Self, CodecError> {
        if bytes.len() as u64 > limit {
            return Err(CodecError::SizeLimit {
                record: Self::RECORD,
                limit,
            });
        }
        // The slice path of bincode ignores the limit, the reader path does not
        let mut reader = bytes;
        let value = options()
            .with_limit(limit)
            .deserialize_from(&mut reader)
            .map_err(|err| match *err {
                ErrorKind::SizeLimit => CodecError::SizeLimit {
                    record: Self::RECORD,
                    limit,
                },
                other => CodecError::Decode {
                    record: Self::RECORD,
                    reason: other.to_string(),
                },
            })?;
        if !reader.is_empty() {
            return Err(CodecError::Decode {
                record: Self::RECORD,
                reason: format!("{} trailing bytes after record", reader.len()),
            });
        }
        Ok(value)
    }

    /// Encode to wire bytes.
    fn encode(&self) -> Result<Vec<u8>, CodecError> {
        options().serialize(self).map_err(|err| CodecError::Encode {
            record: Self::RECORD,
            reason: err.to_string(),
        })
    }
}

macro_rules! wire_message {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl WireMessage for $ty {
                const RECORD: &'static str = $name;
            }
        )+
    };
}

wire_message! {
    crate::entities::TransactionHeader => "TransactionHeader",
    crate::entities::Transaction => "Transaction",
    crate::entities::BatchHeader => "BatchHeader",
    crate::entities::Batch => "Batch",
    crate::entities::BlockHeader => "BlockHeader",
    crate::entities::Block => "Block",
    crate::messages::GossipMessage => "GossipMessage",
    crate::messages::GossipBlockResponse => "GossipBlockResponse",
    crate::messages::GossipBatchResponse => "GossipBatchResponse",
    crate::messages::ClientBatchSubmitRequest => "ClientBatchSubmitRequest",
    crate::messages::ClientBatchSubmitResponse => "ClientBatchSubmitResponse",
}
