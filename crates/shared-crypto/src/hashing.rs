//! # SHA-512 Hashing
//!
//! Payload digests declared in transaction headers.

use sha2::{Digest, Sha512};

/// SHA-512 output (512-bit).
pub type Sha512Digest = [u8; 64];

/// Hash data with SHA-512 (one-shot).
pub fn sha512(data: &[u8]) -> Sha512Digest {
    let mut digest = [0u8; 64];
    digest.copy_from_slice(&Sha512::digest(data));
    digest
}

/// Lower-case hex SHA-512, the form stored in `payload_sha512`.
pub fn sha512_hex(data: &[u8]) -> String {
    hex::encode(sha512(data))
}
