//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Input was not valid hex
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// Public key is not a valid compressed secp256k1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Signature is not a well-formed 64-byte compact signature
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Signature did not verify under the given key and message
    #[error("Signature verification failed")]
    SignatureVerificationFailed,
}
