//! # Core Domain Entities
//!
//! The three nested signed records of the chain.
//!
//! ## Nesting
//!
//! ```text
//! Block ──header + header_signature──┐
//!   └── Batch ──header + header_signature──┐
//!         └── Transaction ──header + header_signature + payload
//! ```
//!
//! Each outer record stores its header as the exact bytes that were signed.
//! `header_signature` is the hex-encoded signature over those bytes and doubles
//! as the record's identifier.

use serde::{Deserialize, Serialize};

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Decoded contents of `Transaction::header`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHeader {
    /// Public key of the party expected to bundle this transaction into a
    /// batch. Must equal the enclosing batch's signer key.
    pub batcher_public_key: String,
    /// Transaction ids that must be committed before this one.
    pub dependencies: Vec<String>,
    /// Transaction family that interprets the payload.
    pub family_name: String,
    /// Version of the transaction family.
    pub family_version: String,
    /// State addresses the transaction may read.
    pub inputs: Vec<String>,
    /// Caller-chosen uniqueness value.
    pub nonce: String,
    /// State addresses the transaction may write.
    pub outputs: Vec<String>,
    /// Lower-case hex SHA-512 of the payload.
    pub payload_sha512: String,
    /// Public key of the transaction signer (hex, compressed secp256k1).
    pub signer_public_key: String,
}

/// A signed transaction as received from the network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Encoded `TransactionHeader`; the signed bytes.
    pub header: Vec<u8>,
    /// Hex signature over `header`. Also the transaction id.
    pub header_signature: String,
    /// Opaque family payload.
    pub payload: Vec<u8>,
}

// =============================================================================
// BATCHES
// =============================================================================

/// Decoded contents of `Batch::header`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchHeader {
    /// Public key of the batcher (hex, compressed secp256k1).
    pub signer_public_key: String,
    /// Ids of the transactions this batch claims to contain.
    pub transaction_ids: Vec<String>,
}

/// An atomic group of transactions signed by a single batcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Encoded `BatchHeader`; the signed bytes.
    pub header: Vec<u8>,
    /// Hex signature over `header`. Also the batch id.
    pub header_signature: String,
    /// Attached transactions, in order.
    pub transactions: Vec<Transaction>,
    /// Request verbose tracing of this batch downstream.
    pub trace: bool,
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Decoded contents of `Block::header`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Height of the block.
    pub block_num: u64,
    /// Id (header signature) of the parent block.
    pub previous_block_id: String,
    /// Public key of the block publisher (hex, compressed secp256k1).
    pub signer_public_key: String,
    /// Ids of every batch committed by this block. The batches attached to a
    /// `Block` on the wire may be a subset.
    pub batch_ids: Vec<String>,
    /// Consensus-specific opaque data.
    pub consensus: Vec<u8>,
    /// State root after applying this block.
    pub state_root_hash: String,
}

/// A signed block with whichever batches were sent alongside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Encoded `BlockHeader`; the signed bytes.
    pub header: Vec<u8>,
    /// Hex signature over `header`. Also the block id.
    pub header_signature: String,
    /// Attached batches, in order.
    pub batches: Vec<Batch>,
}
