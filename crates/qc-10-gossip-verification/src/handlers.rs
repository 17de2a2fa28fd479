//! # Signature Verification Handlers
//!
//! One handler per inbound message shape. Each decodes its message, runs the
//! matching validator, and maps the verdict to a protocol action.
//!
//! ## Trust Boundaries
//!
//! Gossip handlers answer nothing: an invalid record is dropped and a
//! malformed message is returned as `Err` to the dispatch framework. The
//! client submission handler always answers: malformed requests get
//! `INTERNAL_ERROR`, inauthentic ones get `INVALID_BATCH`.

use crate::domain::diagnostics::{Diagnostic, Subject};
use crate::domain::errors::HandlerError;
use crate::domain::validator::SignatureValidator;
use crate::ports::inbound::{ConnectionId, HandlerResult, MessageHandler};
use shared_types::{
    Batch, Block, ClientBatchSubmitRequest, ClientBatchSubmitResponse, ClientBatchSubmitStatus,
    CodecError, GossipBatchResponse, GossipBlockResponse, GossipContentType, GossipMessage,
    MessageType, WireMessage,
};

/// Map a gossip verdict to PASS/DROP and report it.
fn gossip_verdict(
    validator: &SignatureValidator,
    subject: Subject,
    header_signature: &str,
    accepted: bool,
) -> HandlerResult {
    validator.sink().record(Diagnostic::Verdict {
        subject,
        header_signature: header_signature.to_string(),
        accepted,
    });

    if accepted {
        HandlerResult::pass()
    } else {
        HandlerResult::dropped()
    }
}

// =============================================================================
// GOSSIP
// =============================================================================

/// Verifies blocks and batches broadcast in `GossipMessage`s.
#[derive(Clone)]
pub struct GossipMessageSignatureVerifier {
    validator: SignatureValidator,
}

impl GossipMessageSignatureVerifier {
    pub fn new(validator: SignatureValidator) -> Self {
        Self { validator }
    }
}

impl MessageHandler for GossipMessageSignatureVerifier {
    fn handle(
        &self,
        _connection_id: &ConnectionId,
        message: &[u8],
    ) -> Result<HandlerResult, HandlerError> {
        let gossip: GossipMessage = self.validator.decode(message)?;

        match gossip.content_type {
            GossipContentType::Block => {
                let block: Block = self.validator.decode(&gossip.content)?;
                let valid = self.validator.validate_block(&block)?;
                Ok(gossip_verdict(
                    &self.validator,
                    Subject::Block,
                    &block.header_signature,
                    valid,
                ))
            }
            GossipContentType::Batch => {
                let batch: Batch = self.validator.decode(&gossip.content)?;
                let valid = self.validator.validate_batch(&batch)?;
                Ok(gossip_verdict(
                    &self.validator,
                    Subject::Batch,
                    &batch.header_signature,
                    valid,
                ))
            }
        }
    }
}

/// Verifies a block received in answer to a block request.
#[derive(Clone)]
pub struct GossipBlockResponseSignatureVerifier {
    validator: SignatureValidator,
}

impl GossipBlockResponseSignatureVerifier {
    pub fn new(validator: SignatureValidator) -> Self {
        Self { validator }
    }
}

impl MessageHandler for GossipBlockResponseSignatureVerifier {
    fn handle(
        &self,
        _connection_id: &ConnectionId,
        message: &[u8],
    ) -> Result<HandlerResult, HandlerError> {
        let response: GossipBlockResponse = self.validator.decode(message)?;
        let block: Block = self.validator.decode(&response.content)?;
        let valid = self.validator.validate_block(&block)?;

        Ok(gossip_verdict(
            &self.validator,
            Subject::RequestedBlock,
            &block.header_signature,
            valid,
        ))
    }
}

/// Verifies a batch received in answer to a batch request.
#[derive(Clone)]
pub struct GossipBatchResponseSignatureVerifier {
    validator: SignatureValidator,
}

impl GossipBatchResponseSignatureVerifier {
    pub fn new(validator: SignatureValidator) -> Self {
        Self { validator }
    }
}

impl MessageHandler for GossipBatchResponseSignatureVerifier {
    fn handle(
        &self,
        _connection_id: &ConnectionId,
        message: &[u8],
    ) -> Result<HandlerResult, HandlerError> {
        let response: GossipBatchResponse = self.validator.decode(message)?;
        let batch: Batch = self.validator.decode(&response.content)?;
        let valid = self.validator.validate_batch(&batch)?;

        Ok(gossip_verdict(
            &self.validator,
            Subject::RequestedBatch,
            &batch.header_signature,
            valid,
        ))
    }
}

// =============================================================================
// CLIENT SUBMISSION
// =============================================================================

/// Verifies batches submitted directly by a client.
///
/// The only handler that converts decode failures into a response.
#[derive(Clone)]
pub struct BatchListSignatureVerifier {
    validator: SignatureValidator,
}

impl BatchListSignatureVerifier {
    pub fn new(validator: SignatureValidator) -> Self {
        Self { validator }
    }

    fn check_request(&self, message: &[u8]) -> Result<bool, CodecError> {
        let request: ClientBatchSubmitRequest = self.validator.decode(message)?;
        self.validator.validate_batches(&request.batches)
    }

    fn respond(status: ClientBatchSubmitStatus) -> Result<HandlerResult, HandlerError> {
        let response = ClientBatchSubmitResponse { status }
            .encode()
            .map_err(HandlerError::Encode)?;
        Ok(HandlerResult::reply(
            MessageType::ClientBatchSubmitResponse,
            response,
        ))
    }
}

impl MessageHandler for BatchListSignatureVerifier {
    fn handle(
        &self,
        _connection_id: &ConnectionId,
        message: &[u8],
    ) -> Result<HandlerResult, HandlerError> {
        let valid = match self.check_request(message) {
            Ok(valid) => valid,
            Err(err) => {
                self.validator.sink().record(Diagnostic::SubmissionMalformed {
                    reason: err.to_string(),
                });
                return Self::respond(ClientBatchSubmitStatus::InternalError);
            }
        };

        if !valid {
            return Self::respond(ClientBatchSubmitStatus::InvalidBatch);
        }

        Ok(HandlerResult::pass())
    }
}
