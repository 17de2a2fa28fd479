//! # Shared Crypto - Signing and Hashing Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `ecdsa` | secp256k1 (SHA-256 digest) | Header signatures |
//! | `hashing` | SHA-512 | Transaction payload integrity |
//!
//! ## Encodings
//!
//! Keys and signatures cross the wire as hex strings:
//!
//! - Public key: compressed SEC1 point, 33 bytes → 66 hex chars
//! - Signature: compact `r || s`, 64 bytes → 128 hex chars
//!
//! Both upper- and lower-case hex are accepted on input; output is lower-case.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

// Re-exports
pub use ecdsa::{verify_hex, Secp256k1KeyPair, Secp256k1PublicKey, Secp256k1Signature};
pub use errors::CryptoError;
pub use hashing::sha512_hex;
