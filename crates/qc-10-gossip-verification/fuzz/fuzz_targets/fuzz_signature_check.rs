//! Fuzz target for the leaf signature check.
//!
//! Arbitrary header bytes, signature text and key text must yield a
//! deterministic boolean and never panic.
//!
//! ## Running
//!
//! ```bash
//! cd crates/qc-10-gossip-verification
//! cargo +nightly fuzz run fuzz_signature_check
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use qc_10_gossip_verification::{signature_matches, Secp256k1Verifier};

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    header: Vec<u8>,
    signature: String,
    public_key: String,
}

fuzz_target!(|input: FuzzInput| {
    let first = signature_matches(
        &Secp256k1Verifier,
        &input.header,
        &input.signature,
        &input.public_key,
    );
    let second = signature_matches(
        &Secp256k1Verifier,
        &input.header,
        &input.signature,
        &input.public_key,
    );
    assert_eq!(first, second);
});
