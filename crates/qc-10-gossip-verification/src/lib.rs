//! # Gossip Verification Subsystem (QC-10)
//!
//! Decides, for every inbound message carrying a transaction, batch or block,
//! whether its signatures and payload hashes are authentic before the data may
//! enter the validator pipeline.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure checks and the transaction → batch → block cascade
//! - **Ports Layer** (`ports/`): The handler contract we expose, and the verifier and
//!   diagnostic sink we consume
//! - **Adapters Layer** (`adapters/`): secp256k1 verifier and `tracing` sink
//! - **Handlers** (`handlers.rs`): One handler per inbound message shape
//! - **Dispatch** (`dispatch.rs`): Routes message types to handler chains
//!
//! ## Verdicts
//!
//! ```text
//! GOSSIP_MESSAGE ──────────────┐
//! GOSSIP_BLOCK_RESPONSE ───────┼──→ valid: PASS   invalid: DROP    malformed: Err
//! GOSSIP_BATCH_RESPONSE ───────┘
//! CLIENT_BATCH_SUBMIT_REQUEST ─────→ valid: PASS   invalid: RETURN INVALID_BATCH
//!                                                  malformed: RETURN INTERNAL_ERROR
//! ```
//!
//! ## Security Notes
//!
//! - Gossip peers get no feedback on rejection (no amplification)
//! - Clients get a status that separates malformed from inauthentic data
//! - Validation stops at the first failing transaction or batch

pub mod adapters;
pub mod dispatch;
pub mod domain;
pub mod handlers;
pub mod ports;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

// Re-export public API
pub use adapters::secp256k1::Secp256k1Verifier;
pub use adapters::tracing_sink::{NoopSink, TracingSink};
pub use dispatch::Dispatcher;
pub use domain::checks::{payload_matches, signature_matches};
pub use domain::diagnostics::{Diagnostic, Subject};
pub use domain::errors::{DispatchError, HandlerError};
pub use domain::validator::SignatureValidator;
pub use handlers::{
    BatchListSignatureVerifier, GossipBatchResponseSignatureVerifier,
    GossipBlockResponseSignatureVerifier, GossipMessageSignatureVerifier,
};
pub use ports::inbound::{ConnectionId, HandlerResult, HandlerStatus, MessageHandler};
pub use ports::outbound::{DiagnosticSink, SignatureVerifier};
