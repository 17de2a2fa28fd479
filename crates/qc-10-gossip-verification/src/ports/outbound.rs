//! # Outbound Ports (Driven Ports / SPI)
//!
//! What the verification cascade consumes: a signature primitive and a place
//! to report why something was rejected.

use crate::domain::diagnostics::Diagnostic;

/// Black-box signature primitive.
///
/// `signature` and `public_key` are the hex strings exactly as they appear in
/// the record and its header. Implementations must return `false` for any
/// malformed encoding rather than panicking.
pub trait SignatureVerifier: Send + Sync {
    /// True iff `signature` is a valid signature by `public_key` over `message`.
    fn verify(&self, message: &[u8], signature: &str, public_key: &str) -> bool;
}

/// Receiver for verification diagnostics.
///
/// Injected into every validator and handler so callers decide where
/// rejections are reported. Recording must not fail or block.
pub trait DiagnosticSink: Send + Sync {
    /// Record a single diagnostic.
    fn record(&self, diagnostic: Diagnostic);
}
