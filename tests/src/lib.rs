//! # Gossip Verification Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks for the verification cascade
//! │   └── qc_10_verification.rs
//! │
//! └── integration/      # Message-level scenarios through the dispatcher
//!     ├── gossip_flows.rs
//!     └── client_submission.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p qc-tests
//!
//! # By category
//! cargo test -p qc-tests integration::gossip_flows
//! cargo test -p qc-tests integration::client_submission
//!
//! # Benchmarks
//! cargo bench -p qc-tests
//! ```
