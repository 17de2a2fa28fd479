//! # Verification Pipeline
//!
//! Runs frames through the dispatcher in parallel and renders one line per
//! frame, in input order:
//!
//! ```text
//! PASS
//! DROP
//! RETURN CLIENT_BATCH_SUBMIT_RESPONSE <hex body>
//! ERROR <reason>
//! ```

use crate::config::RuntimeConfig;
use crate::framing::Frame;
use qc_10_gossip_verification::{
    ConnectionId, DispatchError, Dispatcher, HandlerResult, HandlerStatus, SignatureValidator,
};
use rayon::prelude::*;
use shared_types::MessageType;
use std::fmt;
use tracing::warn;

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Drop,
    Return {
        message_type: MessageType,
        message_out: Vec<u8>,
    },
    Error(String),
}

impl From<HandlerResult> for Outcome {
    fn from(result: HandlerResult) -> Self {
        match (result.status, result.message_type, result.message_out) {
            (HandlerStatus::Pass, _, _) => Outcome::Pass,
            (HandlerStatus::Drop, _, _) => Outcome::Drop,
            (HandlerStatus::Return, Some(message_type), Some(message_out)) => Outcome::Return {
                message_type,
                message_out,
            },
            (HandlerStatus::Return, _, _) => {
                Outcome::Error("RETURN without a response message".to_string())
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => f.write_str("PASS"),
            Outcome::Drop => f.write_str("DROP"),
            Outcome::Return {
                message_type,
                message_out,
            } => write!(f, "RETURN {} {}", message_type, hex::encode(message_out)),
            Outcome::Error(reason) => write!(f, "ERROR {reason}"),
        }
    }
}

/// Dispatcher bound to a single logical connection.
pub struct Pipeline {
    dispatcher: Dispatcher,
    connection: ConnectionId,
}

impl Pipeline {
    /// secp256k1 signature verifiers with the configured decode limit.
    pub fn new(config: &RuntimeConfig) -> Self {
        let validator =
            SignatureValidator::secp256k1().with_max_message_bytes(config.max_message_bytes);
        Self::with_dispatcher(Dispatcher::with_signature_verifiers(validator))
    }

    pub fn with_dispatcher(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            connection: ConnectionId::from("stdin"),
        }
    }

    /// Process a single frame.
    pub fn process(&self, frame: &Frame) -> Outcome {
        let Some(message_type) = MessageType::from_tag(frame.tag) else {
            warn!(tag = frame.tag, "unknown message type tag");
            return Outcome::Error(format!("unknown message type tag {}", frame.tag));
        };

        match self
            .dispatcher
            .dispatch(&self.connection, message_type, &frame.body)
        {
            Ok(result) => result.into(),
            Err(err) => {
                match &err {
                    DispatchError::NoHandler(_) => warn!(%message_type, "no handler registered"),
                    DispatchError::Handler { source, .. } => {
                        warn!(%message_type, error = %source, "message rejected as malformed")
                    }
                }
                Outcome::Error(err.to_string())
            }
        }
    }

    /// Process every frame in parallel; outcomes keep the input order.
    pub fn process_all(&self, frames: &[Frame]) -> Vec<Outcome> {
        frames.par_iter().map(|frame| self.process(frame)).collect()
    }
}
