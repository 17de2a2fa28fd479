//! # Verification Cascade
//!
//! Transaction → batch → block validation, plus batch lists for client
//! submissions.
//!
//! ## Invariants Enforced
//!
//! | Check | Applies to |
//! |-------|------------|
//! | Header signature verifies under the header's own signer key | transaction, batch, block |
//! | `hex(SHA-512(payload)) == payload_sha512` | transaction |
//! | `txn.batcher_public_key == batch.signer_public_key` | every transaction in a batch |
//!
//! ## Short-Circuiting
//!
//! Batches stop at the first failing transaction and blocks stop at the first
//! failing batch. Items after the failure are never examined, so only the
//! first problem is reported.
//!
//! ## Empty Inputs
//!
//! A block with no attached batches is valid when its header is. An empty
//! batch list is *invalid*: client submissions must carry at least one batch.

use super::checks::{payload_matches, signature_matches};
use super::diagnostics::Diagnostic;
use crate::ports::outbound::{DiagnosticSink, SignatureVerifier};
use shared_types::{
    Batch, BatchHeader, Block, BlockHeader, CodecError, Transaction, TransactionHeader,
    WireMessage, DEFAULT_MAX_MESSAGE_BYTES,
};
use std::sync::Arc;
use tracing::trace;

/// Stateless validator for signed records.
///
/// Cheap to clone; clones share the verifier and sink. Decode failures in any
/// header are returned as `Err` and are never folded into a `false` verdict.
#[derive(Clone)]
pub struct SignatureValidator {
    verifier: Arc<dyn SignatureVerifier>,
    sink: Arc<dyn DiagnosticSink>,
    max_message_bytes: u64,
}

impl SignatureValidator {
    /// Create a validator from a signature primitive and diagnostic sink.
    pub fn new(verifier: Arc<dyn SignatureVerifier>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            verifier,
            sink,
            max_message_bytes: DEFAULT_MAX_MESSAGE_BYTES,
        }
    }

    /// Override the decode limit applied to messages and headers.
    pub fn with_max_message_bytes(mut self, max_message_bytes: u64) -> Self {
        self.max_message_bytes = max_message_bytes;
        self
    }

    /// Decode limit applied to messages and headers.
    pub fn max_message_bytes(&self) -> u64 {
        self.max_message_bytes
    }

    /// The injected diagnostic sink.
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Decode a record under this validator's limit.
    pub fn decode<T: WireMessage>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        T::decode_with_limit(bytes, self.max_message_bytes)
    }

    // =========================================================================
    // TRANSACTIONS
    // =========================================================================

    /// Validate one transaction's signature and payload hash.
    ///
    /// The payload is not hashed when the signature already failed.
    pub fn validate_transaction(&self, txn: &Transaction) -> Result<bool, CodecError> {
        self.check_transaction(txn).map(|(valid, _)| valid)
    }

    /// Returns the verdict together with the decoded header so callers can
    /// inspect it without decoding twice.
    fn check_transaction(
        &self,
        txn: &Transaction,
    ) -> Result<(bool, TransactionHeader), CodecError> {
        let header: TransactionHeader = self.decode(&txn.header)?;

        if !signature_matches(
            self.verifier.as_ref(),
            &txn.header,
            &txn.header_signature,
            &header.signer_public_key,
        ) {
            self.sink.record(Diagnostic::TransactionSignatureInvalid {
                txn: txn.header_signature.clone(),
            });
            return Ok((false, header));
        }

        if !payload_matches(&txn.payload, &header.payload_sha512) {
            self.sink.record(Diagnostic::PayloadHashMismatch {
                txn: txn.header_signature.clone(),
            });
            return Ok((false, header));
        }

        Ok((true, header))
    }

    // =========================================================================
    // BATCHES
    // =========================================================================

    /// Validate a batch header and every attached transaction, in order.
    pub fn validate_batch(&self, batch: &Batch) -> Result<bool, CodecError> {
        let header: BatchHeader = self.decode(&batch.header)?;

        let mut valid = signature_matches(
            self.verifier.as_ref(),
            &batch.header,
            &batch.header_signature,
            &header.signer_public_key,
        );
        if !valid {
            self.sink.record(Diagnostic::BatchSignatureInvalid {
                batch: batch.header_signature.clone(),
            });
        }

        let mut transactions = batch.transactions.iter();
        while valid {
            let Some(txn) = transactions.next() else {
                break;
            };

            let (txn_valid, txn_header) = self.check_transaction(txn)?;
            valid = txn_valid;
            if valid && txn_header.batcher_public_key != header.signer_public_key {
                self.sink.record(Diagnostic::BatcherKeyMismatch {
                    batch: batch.header_signature.clone(),
                    txn: txn.header_signature.clone(),
                });
                valid = false;
            }
        }

        trace!(batch = %batch.header_signature, valid, "batch validated");
        Ok(valid)
    }

    // =========================================================================
    // BLOCKS
    // =========================================================================

    /// Validate a block header and every batch physically attached to it.
    ///
    /// `BlockHeader::batch_ids` is not consulted; only attached batches are
    /// checked.
    pub fn validate_block(&self, block: &Block) -> Result<bool, CodecError> {
        let header: BlockHeader = self.decode(&block.header)?;

        let mut valid = signature_matches(
            self.verifier.as_ref(),
            &block.header,
            &block.header_signature,
            &header.signer_public_key,
        );
        if !valid {
            self.sink.record(Diagnostic::BlockSignatureInvalid {
                block: block.header_signature.clone(),
            });
        }

        let mut batches = block.batches.iter();
        while valid {
            let Some(batch) = batches.next() else {
                break;
            };
            valid = self.validate_batch(batch)?;
        }

        trace!(block = %block.header_signature, valid, "block validated");
        Ok(valid)
    }

    // =========================================================================
    // BATCH LISTS
    // =========================================================================

    /// Validate a client-submitted list of batches as a unit.
    ///
    /// Returns `false` for an empty list.
    pub fn validate_batches(&self, batches: &[Batch]) -> Result<bool, CodecError> {
        let mut valid = false;
        for batch in batches {
            valid = self.validate_batch(batch)?;
            if !valid {
                break;
            }
        }
        Ok(valid)
    }
}
