//! # secp256k1 Verifier Adapter
//!
//! Backs `SignatureVerifier` with `shared-crypto`'s ECDSA over hex encodings.

use crate::adapters::tracing_sink::TracingSink;
use crate::domain::validator::SignatureValidator;
use crate::ports::outbound::SignatureVerifier;
use shared_crypto::verify_hex;
use std::sync::Arc;
use tracing::trace;

/// ECDSA/secp256k1 signature primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Verifier;

impl SignatureVerifier for Secp256k1Verifier {
    fn verify(&self, message: &[u8], signature: &str, public_key: &str) -> bool {
        match verify_hex(message, signature, public_key) {
            Ok(()) => true,
            Err(err) => {
                trace!(error = %err, "secp256k1 verification failed");
                false
            }
        }
    }
}

impl SignatureValidator {
    /// Production validator: secp256k1 signatures, diagnostics to `tracing`.
    pub fn secp256k1() -> Self {
        Self::new(Arc::new(Secp256k1Verifier), Arc::new(TracingSink))
    }
}
