//! # Verifier Runtime
//!
//! Standalone host for the qc-10 gossip verification subsystem.
//!
//! ## Modules
//!
//! - `config/` - Environment configuration
//! - `framing/` - Length-prefixed frame codec for the stdin transport
//! - `pipeline/` - Parallel dispatch and verdict rendering
//!
//! ## Data Flow
//!
//! ```text
//! stdin ──→ read_frames ──→ Pipeline::process_all ──→ stdout
//!                              │  (rayon, per frame)
//!                              ↓
//!                        Dispatcher::dispatch
//!                              │
//!                              ↓
//!                    qc-10 signature verifiers
//! ```

pub mod config;
pub mod framing;
pub mod pipeline;

pub use config::{ConfigError, RuntimeConfig};
pub use framing::{parse_frames, read_frames, Frame, FrameError};
pub use pipeline::{Outcome, Pipeline};
