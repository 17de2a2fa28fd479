//! # Network Messages
//!
//! Envelopes that carry blocks and batches between peers, and the client
//! batch submission exchange.
//!
//! ## Message Types
//!
//! | Tag | Type | Direction |
//! |-----|------|-----------|
//! | 1 | `GossipMessage` | peer → peer |
//! | 2 | `GossipBlockResponse` | peer → peer (answer to a block request) |
//! | 3 | `GossipBatchResponse` | peer → peer (answer to a batch request) |
//! | 4 | `ClientBatchSubmitRequest` | client → validator |
//! | 5 | `ClientBatchSubmitResponse` | validator → client |

use crate::entities::Batch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire tag identifying the shape of a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageType {
    GossipMessage,
    GossipBlockResponse,
    GossipBatchResponse,
    ClientBatchSubmitRequest,
    ClientBatchSubmitResponse,
}

impl MessageType {
    /// All message types, in tag order.
    pub const ALL: [MessageType; 5] = [
        MessageType::GossipMessage,
        MessageType::GossipBlockResponse,
        MessageType::GossipBatchResponse,
        MessageType::ClientBatchSubmitRequest,
        MessageType::ClientBatchSubmitResponse,
    ];

    /// Single-byte tag used by framed transports.
    pub fn tag(self) -> u8 {
        match self {
            MessageType::GossipMessage => 1,
            MessageType::GossipBlockResponse => 2,
            MessageType::GossipBatchResponse => 3,
            MessageType::ClientBatchSubmitRequest => 4,
            MessageType::ClientBatchSubmitResponse => 5,
        }
    }

    /// Inverse of [`MessageType::tag`].
    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.tag() == tag)
    }

    /// Upper-snake-case protocol name.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageType::GossipMessage => "GOSSIP_MESSAGE",
            MessageType::GossipBlockResponse => "GOSSIP_BLOCK_RESPONSE",
            MessageType::GossipBatchResponse => "GOSSIP_BATCH_RESPONSE",
            MessageType::ClientBatchSubmitRequest => "CLIENT_BATCH_SUBMIT_REQUEST",
            MessageType::ClientBatchSubmitResponse => "CLIENT_BATCH_SUBMIT_RESPONSE",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// GOSSIP
// =============================================================================

/// What a `GossipMessage` carries in `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GossipContentType {
    Block,
    Batch,
}

/// Unsolicited block or batch broadcast between peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipMessage {
    pub content_type: GossipContentType,
    /// Encoded `Block` or `Batch`, per `content_type`.
    pub content: Vec<u8>,
    /// Remaining hops before peers stop rebroadcasting.
    pub time_to_live: u32,
}

/// A block sent in answer to a block request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipBlockResponse {
    /// Encoded `Block`.
    pub content: Vec<u8>,
}

/// A batch sent in answer to a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GossipBatchResponse {
    /// Encoded `Batch`.
    pub content: Vec<u8>,
}

// =============================================================================
// CLIENT SUBMISSION
// =============================================================================

/// Batches submitted directly by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBatchSubmitRequest {
    pub batches: Vec<Batch>,
}

/// Outcome reported back to a submitting client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientBatchSubmitStatus {
    Ok,
    /// The request could not be decoded.
    InternalError,
    /// A batch failed signature, hash or batcher verification.
    InvalidBatch,
}

/// Response to a `ClientBatchSubmitRequest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBatchSubmitResponse {
    pub status: ClientBatchSubmitStatus,
}
