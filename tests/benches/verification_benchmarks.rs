//! # Gossip Verification Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | `qc-10/leaf_checks` | single signature verify, SHA-512 payload check |
//! | `qc-10/validate_batch` | batch cascade by transaction count |
//! | `qc-10/validate_block` | block cascade by batch count |
//! | `qc-10/dispatch` | encoded gossip through the handler chain |

use criterion::{criterion_group, criterion_main};
use qc_tests::benchmarks::qc_10_verification::{
    bench_batch_validation, bench_block_validation, bench_dispatch, bench_leaf_checks,
};

criterion_group!(
    benches,
    bench_leaf_checks,
    bench_batch_validation,
    bench_block_validation,
    bench_dispatch
);

criterion_main!(benches);
