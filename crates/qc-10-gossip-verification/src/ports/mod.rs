//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: The handler contract the dispatch framework calls
//! - **Outbound (Driven)**: The signature primitive and diagnostic sink we call

pub mod inbound;
pub mod outbound;
