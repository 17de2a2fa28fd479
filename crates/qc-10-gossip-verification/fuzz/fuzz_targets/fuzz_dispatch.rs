//! Fuzz target for the handler chains.
//!
//! Feeds arbitrary bytes to every registered message type. Gossip handlers may
//! return `Err`; none of them may panic, and client submissions must always
//! produce a reply or a pass.
//!
//! ## Running
//!
//! ```bash
//! cd crates/qc-10-gossip-verification
//! cargo +nightly fuzz run fuzz_dispatch
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use qc_10_gossip_verification::{
    ConnectionId, Dispatcher, HandlerStatus, NoopSink, Secp256k1Verifier, SignatureValidator,
};
use shared_types::MessageType;
use std::sync::Arc;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    tag: u8,
    body: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let validator = SignatureValidator::new(Arc::new(Secp256k1Verifier), Arc::new(NoopSink))
        .with_max_message_bytes(1 << 16);
    let dispatcher = Dispatcher::with_signature_verifiers(validator);
    let connection = ConnectionId::from("fuzz");

    let Some(message_type) = MessageType::from_tag(input.tag) else {
        return;
    };

    let result = dispatcher.dispatch(&connection, message_type, &input.body);

    if message_type == MessageType::ClientBatchSubmitRequest {
        let result = result.expect("client submissions never error");
        if result.status == HandlerStatus::Return {
            assert!(result.message_out.is_some());
        }
    }
});
