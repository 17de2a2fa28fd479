//! # Domain Layer
//!
//! Pure verification logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod checks;
pub mod diagnostics;
pub mod errors;
pub mod validator;
