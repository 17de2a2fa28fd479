//! # Diagnostic Sinks
//!
//! `TracingSink` routes diagnostics to `tracing` at debug level with the
//! header signatures as structured fields. `NoopSink` discards them.

use crate::domain::diagnostics::Diagnostic;
use crate::ports::outbound::DiagnosticSink;
use tracing::debug;

/// Emits every diagnostic as a `tracing` debug event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::TransactionSignatureInvalid { txn } => {
                debug!(txn = %txn, "transaction signature invalid");
            }
            Diagnostic::PayloadHashMismatch { txn } => {
                debug!(txn = %txn, "payload does not match payload_sha512 of the header");
            }
            Diagnostic::BatchSignatureInvalid { batch } => {
                debug!(batch = %batch, "batch failed signature validation");
            }
            Diagnostic::BatcherKeyMismatch { batch, txn } => {
                debug!(
                    batch = %batch,
                    txn = %txn,
                    "txn batcher public key does not match signer public key of batch"
                );
            }
            Diagnostic::BlockSignatureInvalid { block } => {
                debug!(block = %block, "block failed signature validation");
            }
            Diagnostic::SubmissionMalformed { reason } => {
                debug!(reason = %reason, "client batch submission could not be decoded");
            }
            Diagnostic::Verdict {
                subject,
                header_signature,
                accepted: true,
            } => {
                debug!(
                    header_signature = %header_signature,
                    "{} passes signature verification",
                    subject.as_str()
                );
            }
            Diagnostic::Verdict {
                subject,
                header_signature,
                accepted: false,
            } => {
                debug!(
                    header_signature = %header_signature,
                    "{} signature is invalid",
                    subject.as_str()
                );
            }
        }
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _diagnostic: Diagnostic) {}
}
