//! # Leaf Checks
//!
//! The two primitive checks every level of the cascade is built from.

use crate::ports::outbound::SignatureVerifier;
use shared_crypto::sha512_hex;

/// Payload integrity: hex SHA-512 of `payload` equals `declared_hash`.
///
/// Comparison is exact and case-sensitive; an upper-case declaration never
/// matches.
pub fn payload_matches(payload: &[u8], declared_hash: &str) -> bool {
    sha512_hex(payload) == declared_hash
}

/// Header signature: `signature` verifies over `signed_bytes` under `public_key`.
pub fn signature_matches(
    verifier: &dyn SignatureVerifier,
    signed_bytes: &[u8],
    signature: &str,
    public_key: &str,
) -> bool {
    verifier.verify(signed_bytes, signature, public_key)
}
