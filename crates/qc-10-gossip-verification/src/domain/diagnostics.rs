//! # Diagnostics
//!
//! Structured reasons a record was rejected, and the verdicts handlers reach.
//! Every rejection carries the header signature(s) involved so it can be
//! traced back to the offending record.

/// What a verdict was reached about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Block carried by a gossip message.
    Block,
    /// Batch carried by a gossip message.
    Batch,
    /// Block received in answer to a request.
    RequestedBlock,
    /// Batch received in answer to a request.
    RequestedBatch,
}

impl Subject {
    pub fn as_str(self) -> &'static str {
        match self {
            Subject::Block => "block",
            Subject::Batch => "batch",
            Subject::RequestedBlock => "requested block",
            Subject::RequestedBatch => "requested batch",
        }
    }
}

/// One diagnostic event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Transaction header signature did not verify.
    TransactionSignatureInvalid { txn: String },
    /// Payload digest differs from the header's `payload_sha512`.
    PayloadHashMismatch { txn: String },
    /// Batch header signature did not verify.
    BatchSignatureInvalid { batch: String },
    /// Transaction's batcher key differs from the batch signer key.
    BatcherKeyMismatch { batch: String, txn: String },
    /// Block header signature did not verify.
    BlockSignatureInvalid { block: String },
    /// A client submission could not be decoded.
    SubmissionMalformed { reason: String },
    /// A gossip handler reached a verdict.
    Verdict {
        subject: Subject,
        header_signature: String,
        accepted: bool,
    },
}
