//! # Shared Types Crate
//!
//! Wire records exchanged between validators and clients, and the codec used
//! to turn untrusted bytes into them.
//!
//! ## Design Principles
//!
//! - **Headers Stay Opaque**: `Transaction`, `Batch` and `Block` carry their
//!   headers as the exact signed bytes. Headers are decoded on demand so a
//!   signature is always checked over what the signer actually produced.
//! - **Bounded Decoding**: every record decodes through `WireMessage`, which
//!   enforces a byte limit and rejects trailing garbage.
//! - **Closed Tags**: content and message type tags are enums; an unknown tag
//!   is a decode error, never a silent default.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod messages;

pub use codec::{WireMessage, DEFAULT_MAX_MESSAGE_BYTES};
pub use entities::*;
pub use errors::CodecError;
pub use messages::*;
