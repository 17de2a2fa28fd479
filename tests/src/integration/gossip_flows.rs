//! # Gossip Flows
//!
//! Peer-originated blocks and batches through the production handler chains.
//!
//! ## Flows Tested
//!
//! 1. **GOSSIP_MESSAGE**: block and batch content, valid and forged
//! 2. **GOSSIP_BLOCK_RESPONSE / GOSSIP_BATCH_RESPONSE**: requested records
//! 3. **Malformed gossip**: decode failures escape as errors, never replies
//! 4. **Concurrency**: one dispatcher shared by many worker threads

#[cfg(test)]
mod tests {
    use qc_10_gossip_verification::test_helpers::*;
    use qc_10_gossip_verification::{
        ConnectionId, Diagnostic, DispatchError, Dispatcher, HandlerError, HandlerResult,
        HandlerStatus, Subject,
    };
    use rayon::prelude::*;
    use shared_crypto::{sha512_hex, Secp256k1KeyPair};
    use shared_types::{
        GossipContentType, GossipMessage, MessageType, TransactionHeader, WireMessage,
    };
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn peer() -> ConnectionId {
        ConnectionId::from("tcp://10.0.0.7:8800")
    }

    fn dispatcher() -> (Dispatcher, Arc<RecordingSink>) {
        let (validator, sink) = recording_validator();
        (Dispatcher::with_signature_verifiers(validator), sink)
    }

    fn verdicts(sink: &RecordingSink) -> Vec<Diagnostic> {
        sink.records()
            .into_iter()
            .filter(|d| matches!(d, Diagnostic::Verdict { .. }))
            .collect()
    }

    // =============================================================================
    // GOSSIP_MESSAGE
    // =============================================================================

    #[test]
    fn test_valid_block_gossip_passes_with_single_verdict() {
        let (dispatcher, sink) = dispatcher();
        let block = valid_block(3, 3);

        let result = dispatcher
            .dispatch(&peer(), MessageType::GossipMessage, &gossip_block(&block))
            .unwrap();

        assert_eq!(result, HandlerResult::pass());
        assert_eq!(
            sink.records(),
            vec![Diagnostic::Verdict {
                subject: Subject::Block,
                header_signature: block.header_signature,
                accepted: true,
            }]
        );
    }

    #[test]
    fn test_block_with_forged_transaction_payload_is_dropped() {
        let (dispatcher, sink) = dispatcher();
        let mut block = valid_block(2, 2);
        block.batches[1].transactions[0].payload = b"mint 1000000".to_vec();
        let forged = block.batches[1].transactions[0].header_signature.clone();

        let result = dispatcher
            .dispatch(&peer(), MessageType::GossipMessage, &gossip_block(&block))
            .unwrap();

        assert_eq!(result.status, HandlerStatus::Drop);
        assert!(result.message_out.is_none());
        assert_eq!(
            sink.records(),
            vec![
                Diagnostic::PayloadHashMismatch { txn: forged },
                Diagnostic::Verdict {
                    subject: Subject::Block,
                    header_signature: block.header_signature,
                    accepted: false,
                },
            ]
        );
    }

    #[test]
    fn test_block_stops_at_first_bad_batch() {
        let (dispatcher, sink) = dispatcher();
        let mut block = valid_block(3, 1);
        block.batches[0].header_signature = flip_hex_bit(&block.batches[0].header_signature, 33);
        block.batches[1].header_signature = flip_hex_bit(&block.batches[1].header_signature, 33);
        // Mutating attached batches does not touch the signed block header
        let first_bad = block.batches[0].header_signature.clone();

        let result = dispatcher
            .dispatch(&peer(), MessageType::GossipMessage, &gossip_block(&block))
            .unwrap();

        assert_eq!(result.status, HandlerStatus::Drop);
        let rejections: Vec<_> = sink
            .records()
            .into_iter()
            .filter(|d| !matches!(d, Diagnostic::Verdict { .. }))
            .collect();
        assert_eq!(
            rejections,
            vec![Diagnostic::BatchSignatureInvalid { batch: first_bad }]
        );
    }

    #[test]
    fn test_batch_gossip_with_foreign_batcher_is_dropped() {
        let (dispatcher, sink) = dispatcher();
        let batcher = Secp256k1KeyPair::generate();
        let other_batcher = Secp256k1KeyPair::generate();
        let signer = Secp256k1KeyPair::generate();
        let txn = signed_transaction(&signer, &other_batcher.public_key().to_hex(), b"inc a 1");
        let batch = signed_batch(&batcher, vec![txn.clone()]);

        let result = dispatcher
            .dispatch(&peer(), MessageType::GossipMessage, &gossip_batch(&batch))
            .unwrap();

        assert_eq!(result.status, HandlerStatus::Drop);
        assert!(sink.records().contains(&Diagnostic::BatcherKeyMismatch {
            batch: batch.header_signature.clone(),
            txn: txn.header_signature,
        }));
    }

    #[test]
    fn test_transaction_signed_over_different_header_is_dropped() {
        let (dispatcher, _) = dispatcher();
        let batcher = Secp256k1KeyPair::generate();
        let signer = Secp256k1KeyPair::generate();
        let header = TransactionHeader {
            batcher_public_key: batcher.public_key().to_hex(),
            payload_sha512: sha512_hex(b"transfer"),
            signer_public_key: signer.public_key().to_hex(),
            nonce: "1".into(),
            ..Default::default()
        };
        let mut txn = sign_transaction_header(&signer, &header, b"transfer");
        let replayed = sign_transaction_header(
            &signer,
            &TransactionHeader {
                nonce: "2".into(),
                ..header
            },
            b"transfer",
        );
        txn.header_signature = replayed.header_signature;
        let batch = signed_batch(&batcher, vec![txn]);

        let result = dispatcher
            .dispatch(&peer(), MessageType::GossipMessage, &gossip_batch(&batch))
            .unwrap();

        assert_eq!(result.status, HandlerStatus::Drop);
    }

    // =============================================================================
    // RESPONSES
    // =============================================================================

    #[test]
    fn test_requested_block_and_batch_verdicts() {
        let (dispatcher, sink) = dispatcher();
        let block = valid_block(1, 2);
        let batch = valid_batch(&Secp256k1KeyPair::generate(), 2);

        let block_result = dispatcher
            .dispatch(
                &peer(),
                MessageType::GossipBlockResponse,
                &block_response(&block),
            )
            .unwrap();
        let batch_result = dispatcher
            .dispatch(
                &peer(),
                MessageType::GossipBatchResponse,
                &batch_response(&batch),
            )
            .unwrap();

        assert_eq!(block_result.status, HandlerStatus::Pass);
        assert_eq!(batch_result.status, HandlerStatus::Pass);
        assert_eq!(
            verdicts(&sink),
            vec![
                Diagnostic::Verdict {
                    subject: Subject::RequestedBlock,
                    header_signature: block.header_signature,
                    accepted: true,
                },
                Diagnostic::Verdict {
                    subject: Subject::RequestedBatch,
                    header_signature: batch.header_signature,
                    accepted: true,
                },
            ]
        );
    }

    #[test]
    fn test_requested_block_with_forged_signature_is_dropped() {
        let (dispatcher, _) = dispatcher();
        let mut block = valid_block(0, 0);
        block.header_signature = Secp256k1KeyPair::generate().sign(&block.header).to_hex();

        let result = dispatcher
            .dispatch(
                &peer(),
                MessageType::GossipBlockResponse,
                &block_response(&block),
            )
            .unwrap();

        assert_eq!(result.status, HandlerStatus::Drop);
    }

    // =============================================================================
    // MALFORMED GOSSIP
    // =============================================================================

    #[test]
    fn test_malformed_gossip_is_an_error_for_every_gossip_type() {
        let (dispatcher, sink) = dispatcher();

        for message_type in [
            MessageType::GossipMessage,
            MessageType::GossipBlockResponse,
            MessageType::GossipBatchResponse,
        ] {
            let err = dispatcher
                .dispatch(&peer(), message_type, b"\xde\xad\xbe\xef")
                .unwrap_err();
            assert!(matches!(
                err,
                DispatchError::Handler {
                    source: HandlerError::Decode(_),
                    ..
                }
            ));
        }
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_gossip_with_undecodable_content_is_an_error() {
        let (dispatcher, _) = dispatcher();
        let message = GossipMessage {
            content_type: GossipContentType::Batch,
            content: vec![0u8; 3],
            time_to_live: 1,
        };

        let result = dispatcher.dispatch(
            &peer(),
            MessageType::GossipMessage,
            &message.encode().unwrap(),
        );

        assert!(result.is_err());
    }

    // =============================================================================
    // CONCURRENCY
    // =============================================================================

    #[test]
    fn test_shared_dispatcher_across_threads() {
        let (dispatcher, sink) = dispatcher();
        let good = valid_block(1, 2);
        let mut bad = valid_block(1, 2);
        bad.batches[0].transactions[1].payload.push(b'!');
        let messages = [gossip_block(&good), gossip_block(&bad)];

        let statuses: Vec<HandlerStatus> = (0..64)
            .into_par_iter()
            .map(|i| {
                dispatcher
                    .dispatch(&peer(), MessageType::GossipMessage, &messages[i % 2])
                    .unwrap()
                    .status
            })
            .collect();

        for (i, status) in statuses.iter().enumerate() {
            let expected = if i % 2 == 0 {
                HandlerStatus::Pass
            } else {
                HandlerStatus::Drop
            };
            assert_eq!(*status, expected);
        }
        assert_eq!(verdicts(&sink).len(), 64);
    }
}
