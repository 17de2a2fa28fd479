//! # ECDSA Signatures (secp256k1)
//!
//! Header signatures for transactions, batches and blocks.
//!
//! ## Security Properties
//!
//! - Message digest is SHA-256 of the exact header bytes
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization on signing; high-S signatures are rejected on verify
//!
//! ## Use Cases
//!
//! - Verifying gossip and client submissions at the network edge
//! - Producing fixtures for tests and benchmarks

use crate::CryptoError;
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};

fn decode_hex(input: &str) -> Result<Vec<u8>, CryptoError> {
    hex::decode(input).map_err(|e| CryptoError::InvalidHex(e.to_string()))
}

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey([u8; 33]);

impl Secp256k1PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, CryptoError> {
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parse the 66-character hex form carried in headers.
    pub fn from_hex(input: &str) -> Result<Self, CryptoError> {
        let bytes: [u8; 33] = decode_hex(input)?
            .try_into()
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(bytes)
    }

    /// Lower-case hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify a signature over `message`.
    pub fn verify(
        &self,
        message: &[u8],
        signature: &Secp256k1Signature,
    ) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_sec1_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;

        let sig =
            Signature::from_slice(&signature.0).map_err(|_| CryptoError::InvalidSignatureFormat)?;

        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// ECDSA signature (64 bytes, r||s format).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Signature([u8; 64]);

impl Secp256k1Signature {
    /// Parse the 128-character hex form carried as `header_signature`.
    pub fn from_hex(input: &str) -> Result<Self, CryptoError> {
        let bytes: [u8; 64] = decode_hex(input)?
            .try_into()
            .map_err(|_| CryptoError::InvalidSignatureFormat)?;
        Ok(Self(bytes))
    }

    /// Lower-case hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Verify a hex signature over `message` with a hex public key.
///
/// Any malformed input surfaces as a `CryptoError`; callers that only need a
/// verdict should treat every error as "not valid".
pub fn verify_hex(
    message: &[u8],
    signature_hex: &str,
    public_key_hex: &str,
) -> Result<(), CryptoError> {
    let public_key = Secp256k1PublicKey::from_hex(public_key_hex)?;
    let signature = Secp256k1Signature::from_hex(signature_hex)?;
    public_key.verify(message, &signature)
}

/// secp256k1 ECDSA keypair.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate random keypair.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Get public key (compressed, 33 bytes).
    pub fn public_key(&self) -> Secp256k1PublicKey {
        let point = self.signing_key.verifying_key().to_encoded_point(true);
        // SEC1 compressed form: 0x02/0x03 prefix followed by the x-coordinate
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(point.as_bytes());
        Secp256k1PublicKey(bytes)
    }

    /// Sign a message (deterministic RFC 6979).
    pub fn sign(&self, message: &[u8]) -> Secp256k1Signature {
        let sig: Signature = self.signing_key.sign(message);
        let bytes: [u8; 64] = sig.to_bytes().into();
        Secp256k1Signature(bytes)
    }
}
