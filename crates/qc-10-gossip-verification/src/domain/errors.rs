//! # Handler Errors
//!
//! Failures that escape a handler instead of becoming a verdict. Invalid
//! signatures and hash mismatches are verdicts, never errors.

use shared_types::{CodecError, MessageType};
use thiserror::Error;

/// Errors returned by a `MessageHandler`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandlerError {
    /// A message, nested record or header could not be decoded.
    #[error("Decode failure: {0}")]
    Decode(CodecError),

    /// A response message could not be encoded.
    #[error("Encode failure: {0}")]
    Encode(CodecError),
}

impl From<CodecError> for HandlerError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Encode { .. } => HandlerError::Encode(err),
            other => HandlerError::Decode(other),
        }
    }
}

/// Errors returned by the `Dispatcher`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler is registered for the message type.
    #[error("No handler registered for {0}")]
    NoHandler(MessageType),

    /// A handler in the chain failed.
    #[error("Handler for {message_type} failed: {source}")]
    Handler {
        message_type: MessageType,
        #[source]
        source: HandlerError,
    },
}
