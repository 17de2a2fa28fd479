//! # Client Batch Submission
//!
//! CLIENT_BATCH_SUBMIT_REQUEST through the production chain. Clients always
//! get an answer: nothing for valid submissions (the request passes on),
//! `INVALID_BATCH` for inauthentic data and `INTERNAL_ERROR` for data that
//! cannot be decoded.

#[cfg(test)]
mod tests {
    use qc_10_gossip_verification::test_helpers::*;
    use qc_10_gossip_verification::{
        ConnectionId, Diagnostic, Dispatcher, HandlerResult, HandlerStatus,
    };
    use shared_crypto::Secp256k1KeyPair;
    use shared_types::{
        Batch, ClientBatchSubmitRequest, ClientBatchSubmitResponse, ClientBatchSubmitStatus,
        MessageType, WireMessage,
    };
    use std::sync::Arc;

    fn client() -> ConnectionId {
        ConnectionId::from("client-42")
    }

    fn dispatcher() -> (Dispatcher, Arc<RecordingSink>) {
        let (validator, sink) = recording_validator();
        (Dispatcher::with_signature_verifiers(validator), sink)
    }

    fn submit(dispatcher: &Dispatcher, body: &[u8]) -> HandlerResult {
        dispatcher
            .dispatch(&client(), MessageType::ClientBatchSubmitRequest, body)
            .expect("client submissions never fail dispatch")
    }

    fn returned_status(result: &HandlerResult) -> ClientBatchSubmitStatus {
        assert_eq!(result.status, HandlerStatus::Return);
        assert_eq!(
            result.message_type,
            Some(MessageType::ClientBatchSubmitResponse)
        );
        let body = result.message_out.as_ref().expect("RETURN carries a body");
        ClientBatchSubmitResponse::decode(body).unwrap().status
    }

    #[test]
    fn test_valid_submission_passes_without_reply() {
        let (dispatcher, sink) = dispatcher();
        let batches: Vec<Batch> = (0..4)
            .map(|_| valid_batch(&Secp256k1KeyPair::generate(), 3))
            .collect();

        let result = submit(&dispatcher, &submit_request(batches));

        assert_eq!(result, HandlerResult::pass());
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_one_bad_batch_rejects_whole_submission() {
        let (dispatcher, _) = dispatcher();
        let batcher = Secp256k1KeyPair::generate();
        let mut batches: Vec<Batch> = (0..3).map(|_| valid_batch(&batcher, 1)).collect();
        batches[2].transactions[0].header_signature =
            flip_hex_bit(&batches[2].transactions[0].header_signature, 300);

        let result = submit(&dispatcher, &submit_request(batches));

        assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InvalidBatch);
    }

    #[test]
    fn test_empty_submission_is_invalid_batch() {
        let (dispatcher, _) = dispatcher();

        let result = submit(&dispatcher, &submit_request(vec![]));

        assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InvalidBatch);
    }

    #[test]
    fn test_undecodable_request_is_internal_error() {
        let (dispatcher, sink) = dispatcher();

        for body in [&b""[..], b"\x01", b"not a batch list at all"] {
            let result = submit(&dispatcher, body);
            assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InternalError);
        }
        assert_eq!(sink.records().len(), 3);
        assert!(sink
            .records()
            .iter()
            .all(|d| matches!(d, Diagnostic::SubmissionMalformed { .. })));
    }

    #[test]
    fn test_undecodable_transaction_header_is_internal_error() {
        let (dispatcher, _) = dispatcher();
        let batcher = Secp256k1KeyPair::generate();
        let mut batch = valid_batch(&batcher, 2);
        batch.transactions[1].header = vec![0x00; 5];

        let result = submit(&dispatcher, &submit_request(vec![batch]));

        assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InternalError);
    }

    #[test]
    fn test_invalid_batch_before_undecodable_one_is_invalid_batch() {
        let (dispatcher, _) = dispatcher();
        let mut bad = valid_batch(&Secp256k1KeyPair::generate(), 1);
        bad.transactions[0].payload.clear();
        let undecodable = Batch {
            header: vec![0xFF],
            ..Default::default()
        };

        let result = submit(&dispatcher, &submit_request(vec![bad, undecodable]));

        assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InvalidBatch);
    }

    #[test]
    fn test_oversized_request_is_internal_error() {
        let (validator, _) = recording_validator();
        let dispatcher =
            Dispatcher::with_signature_verifiers(validator.with_max_message_bytes(256));
        let request = ClientBatchSubmitRequest {
            batches: (0..4)
                .map(|_| valid_batch(&Secp256k1KeyPair::generate(), 2))
                .collect(),
        };

        let result = submit(&dispatcher, &request.encode().unwrap());

        assert_eq!(returned_status(&result), ClientBatchSubmitStatus::InternalError);
    }
}
