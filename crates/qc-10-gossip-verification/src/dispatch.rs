//! # Message Dispatch
//!
//! Routes an inbound message to the handler chain registered for its type.
//! Handlers run in registration order; the first result other than PASS ends
//! the chain and is returned as-is.

use crate::domain::errors::DispatchError;
use crate::domain::validator::SignatureValidator;
use crate::handlers::{
    BatchListSignatureVerifier, GossipBatchResponseSignatureVerifier,
    GossipBlockResponseSignatureVerifier, GossipMessageSignatureVerifier,
};
use crate::ports::inbound::{ConnectionId, HandlerResult, HandlerStatus, MessageHandler};
use shared_types::MessageType;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Handler chains keyed by message type.
///
/// Registration happens up front through `&mut self`; dispatch only needs
/// `&self`, so a built dispatcher can be shared across worker threads.
#[derive(Default)]
pub struct Dispatcher {
    chains: HashMap<MessageType, Vec<Arc<dyn MessageHandler>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with the four signature verifiers registered against their
    /// message types, all sharing `validator`.
    pub fn with_signature_verifiers(validator: SignatureValidator) -> Self {
        let mut dispatcher = Self::new();
        dispatcher.add_handler(
            MessageType::GossipMessage,
            Arc::new(GossipMessageSignatureVerifier::new(validator.clone())),
        );
        dispatcher.add_handler(
            MessageType::GossipBlockResponse,
            Arc::new(GossipBlockResponseSignatureVerifier::new(validator.clone())),
        );
        dispatcher.add_handler(
            MessageType::GossipBatchResponse,
            Arc::new(GossipBatchResponseSignatureVerifier::new(validator.clone())),
        );
        dispatcher.add_handler(
            MessageType::ClientBatchSubmitRequest,
            Arc::new(BatchListSignatureVerifier::new(validator)),
        );
        dispatcher
    }

    /// Append `handler` to the chain for `message_type`.
    pub fn add_handler(&mut self, message_type: MessageType, handler: Arc<dyn MessageHandler>) {
        self.chains.entry(message_type).or_default().push(handler);
    }

    /// Number of handlers registered for `message_type`.
    pub fn handler_count(&self, message_type: MessageType) -> usize {
        self.chains.get(&message_type).map_or(0, Vec::len)
    }

    /// Run the chain for `message_type` over `message`.
    pub fn dispatch(
        &self,
        connection_id: &ConnectionId,
        message_type: MessageType,
        message: &[u8],
    ) -> Result<HandlerResult, DispatchError> {
        let chain = self
            .chains
            .get(&message_type)
            .filter(|chain| !chain.is_empty())
            .ok_or(DispatchError::NoHandler(message_type))?;

        for handler in chain {
            let result = handler
                .handle(connection_id, message)
                .map_err(|source| DispatchError::Handler {
                    message_type,
                    source,
                })?;

            if result.status != HandlerStatus::Pass {
                debug!(
                    connection = %connection_id,
                    message_type = %message_type,
                    status = %result.status,
                    "handler chain stopped"
                );
                return Ok(result);
            }
        }

        trace!(connection = %connection_id, message_type = %message_type, "handler chain passed");
        Ok(HandlerResult::pass())
    }
}
