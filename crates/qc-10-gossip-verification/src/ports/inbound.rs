//! # Inbound Ports (Driving Ports / API)
//!
//! The contract the surrounding dispatch framework drives.

use crate::domain::errors::HandlerError;
use shared_types::MessageType;
use std::fmt;

/// Opaque identifier of the connection a message arrived on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub String);

impl From<&str> for ConnectionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the caller should do with a message after this layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerStatus {
    /// Continue to the next stage downstream.
    Pass,
    /// Discard silently; nothing is sent back.
    Drop,
    /// Send `message_out` back to the originating connection.
    Return,
}

impl HandlerStatus {
    /// Upper-case protocol name.
    pub fn as_str(self) -> &'static str {
        match self {
            HandlerStatus::Pass => "PASS",
            HandlerStatus::Drop => "DROP",
            HandlerStatus::Return => "RETURN",
        }
    }
}

impl fmt::Display for HandlerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of handling one message.
///
/// `message_out` and `message_type` are set only for `Return`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerResult {
    pub status: HandlerStatus,
    pub message_out: Option<Vec<u8>>,
    pub message_type: Option<MessageType>,
}

impl HandlerResult {
    /// Let the message through.
    pub fn pass() -> Self {
        Self {
            status: HandlerStatus::Pass,
            message_out: None,
            message_type: None,
        }
    }

    /// Discard the message without a reply.
    pub fn dropped() -> Self {
        Self {
            status: HandlerStatus::Drop,
            message_out: None,
            message_type: None,
        }
    }

    /// Reply to the sender with an encoded message.
    pub fn reply(message_type: MessageType, message_out: Vec<u8>) -> Self {
        Self {
            status: HandlerStatus::Return,
            message_out: Some(message_out),
            message_type: Some(message_type),
        }
    }
}

/// A stateless handler for one inbound message shape.
///
/// Implementations must be thread-safe (`Send + Sync`) so a single instance
/// can serve every worker of the dispatch framework.
pub trait MessageHandler: Send + Sync {
    /// Handle the raw bytes of one message.
    ///
    /// # Errors
    /// Structural failures the handler does not convert into a protocol
    /// response, most notably decode failures on gossip paths.
    fn handle(
        &self,
        connection_id: &ConnectionId,
        message: &[u8],
    ) -> Result<HandlerResult, HandlerError>;
}
