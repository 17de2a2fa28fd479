//! # Adapters Module
//!
//! Infrastructure adapters implementing the outbound ports.

pub mod secp256k1;
pub mod tracing_sink;
