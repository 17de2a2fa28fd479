//! Test helpers for building signed fixtures.
//!
//! Exposed to other crates via the `test-helpers` feature.

use crate::adapters::secp256k1::Secp256k1Verifier;
use crate::domain::diagnostics::Diagnostic;
use crate::domain::validator::SignatureValidator;
use crate::ports::outbound::DiagnosticSink;
use parking_lot::Mutex;
use shared_crypto::{sha512_hex, Secp256k1KeyPair};
use shared_types::{
    Batch, BatchHeader, Block, BlockHeader, ClientBatchSubmitRequest, GossipBatchResponse,
    GossipBlockResponse, GossipContentType, GossipMessage, Transaction, TransactionHeader,
    WireMessage,
};
use std::sync::Arc;

/// Sink that keeps every diagnostic for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.records.lock().push(diagnostic);
    }
}

/// secp256k1 validator wired to a fresh [`RecordingSink`].
pub fn recording_validator() -> (SignatureValidator, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let validator = SignatureValidator::new(Arc::new(Secp256k1Verifier), sink.clone());
    (validator, sink)
}

/// Flip one bit of a hex string's decoded bytes and re-encode it.
///
/// Bit positions wrap around the decoded length.
pub fn flip_hex_bit(input: &str, bit: usize) -> String {
    let mut bytes = hex::decode(input).expect("fixture hex must decode");
    let len = bytes.len();
    bytes[(bit / 8) % len] ^= 1 << (bit % 8);
    hex::encode(bytes)
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Sign an arbitrary transaction header.
pub fn sign_transaction_header(
    signer: &Secp256k1KeyPair,
    header: &TransactionHeader,
    payload: &[u8],
) -> Transaction {
    let header = header.encode().expect("header encodes");
    Transaction {
        header_signature: signer.sign(&header).to_hex(),
        header,
        payload: payload.to_vec(),
    }
}

/// A well-formed transaction signed by `signer` and bound to `batcher_public_key`.
pub fn signed_transaction(
    signer: &Secp256k1KeyPair,
    batcher_public_key: &str,
    payload: &[u8],
) -> Transaction {
    let header = TransactionHeader {
        batcher_public_key: batcher_public_key.to_string(),
        family_name: "intkey".into(),
        family_version: "1.0".into(),
        inputs: vec!["1cf126".into()],
        nonce: sha512_hex(payload)[..16].to_string(),
        outputs: vec!["1cf126".into()],
        payload_sha512: sha512_hex(payload),
        signer_public_key: signer.public_key().to_hex(),
        ..Default::default()
    };
    sign_transaction_header(signer, &header, payload)
}

// =============================================================================
// BATCHES
// =============================================================================

/// Wrap `transactions` in a batch signed by `batcher`.
pub fn signed_batch(batcher: &Secp256k1KeyPair, transactions: Vec<Transaction>) -> Batch {
    let header = BatchHeader {
        signer_public_key: batcher.public_key().to_hex(),
        transaction_ids: transactions
            .iter()
            .map(|txn| txn.header_signature.clone())
            .collect(),
    };
    let header = header.encode().expect("header encodes");
    Batch {
        header_signature: batcher.sign(&header).to_hex(),
        header,
        transactions,
        trace: false,
    }
}

/// A fully valid batch of `txn_count` transactions, each from its own signer.
pub fn valid_batch(batcher: &Secp256k1KeyPair, txn_count: usize) -> Batch {
    let batcher_key = batcher.public_key().to_hex();
    let transactions = (0..txn_count)
        .map(|i| {
            let signer = Secp256k1KeyPair::generate();
            signed_transaction(&signer, &batcher_key, format!("set k{i} {i}").as_bytes())
        })
        .collect();
    signed_batch(batcher, transactions)
}

// =============================================================================
// BLOCKS
// =============================================================================

/// Sign an arbitrary block header and attach `batches`.
pub fn sign_block_header(
    publisher: &Secp256k1KeyPair,
    header: &BlockHeader,
    batches: Vec<Batch>,
) -> Block {
    let header = header.encode().expect("header encodes");
    Block {
        header_signature: publisher.sign(&header).to_hex(),
        header,
        batches,
    }
}

/// A block listing and carrying `batches`, signed by `publisher`.
pub fn signed_block(publisher: &Secp256k1KeyPair, batches: Vec<Batch>) -> Block {
    let header = BlockHeader {
        block_num: 1,
        previous_block_id: "0".repeat(128),
        signer_public_key: publisher.public_key().to_hex(),
        batch_ids: batches
            .iter()
            .map(|batch| batch.header_signature.clone())
            .collect(),
        consensus: b"Devmode".to_vec(),
        state_root_hash: "0".repeat(64),
    };
    sign_block_header(publisher, &header, batches)
}

/// A fully valid block of `batch_count` batches with `txns_per_batch` each.
pub fn valid_block(batch_count: usize, txns_per_batch: usize) -> Block {
    let batches = (0..batch_count)
        .map(|_| valid_batch(&Secp256k1KeyPair::generate(), txns_per_batch))
        .collect();
    signed_block(&Secp256k1KeyPair::generate(), batches)
}

// =============================================================================
// MESSAGES
// =============================================================================

pub fn gossip_block(block: &Block) -> Vec<u8> {
    GossipMessage {
        content_type: GossipContentType::Block,
        content: block.encode().expect("block encodes"),
        time_to_live: 3,
    }
    .encode()
    .expect("message encodes")
}

pub fn gossip_batch(batch: &Batch) -> Vec<u8> {
    GossipMessage {
        content_type: GossipContentType::Batch,
        content: batch.encode().expect("batch encodes"),
        time_to_live: 3,
    }
    .encode()
    .expect("message encodes")
}

pub fn block_response(block: &Block) -> Vec<u8> {
    GossipBlockResponse {
        content: block.encode().expect("block encodes"),
    }
    .encode()
    .expect("message encodes")
}

pub fn batch_response(batch: &Batch) -> Vec<u8> {
    GossipBatchResponse {
        content: batch.encode().expect("batch encodes"),
    }
    .encode()
    .expect("message encodes")
}

pub fn submit_request(batches: Vec<Batch>) -> Vec<u8> {
    ClientBatchSubmitRequest { batches }
        .encode()
        .expect("message encodes")
}
