//! # QC-10 Gossip Verification Benchmarks
//!
//! Cost of the verification cascade at each level:
//! - Leaf checks: one secp256k1 verify, one SHA-512 over a payload
//! - Batch validation as transaction count grows
//! - Block validation as batch count grows
//! - Full dispatch of encoded gossip, sequential and across rayon workers

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use qc_10_gossip_verification::test_helpers::*;
use qc_10_gossip_verification::{
    payload_matches, signature_matches, ConnectionId, Dispatcher, NoopSink, Secp256k1Verifier,
    SignatureValidator,
};
use rand::RngCore;
use rayon::prelude::*;
use shared_crypto::{sha512_hex, Secp256k1KeyPair};
use shared_types::MessageType;
use std::sync::Arc;
use std::time::Duration;

fn quiet_validator() -> SignatureValidator {
    SignatureValidator::new(Arc::new(Secp256k1Verifier), Arc::new(NoopSink))
}

fn random_payload(size: usize) -> Vec<u8> {
    let mut payload = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut payload);
    payload
}

pub fn bench_leaf_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-10/leaf_checks");

    let keypair = Secp256k1KeyPair::generate();
    let header = random_payload(256);
    let signature = keypair.sign(&header).to_hex();
    let public_key = keypair.public_key().to_hex();

    group.bench_function("signature_matches", |b| {
        b.iter(|| {
            black_box(signature_matches(
                &Secp256k1Verifier,
                black_box(&header),
                &signature,
                &public_key,
            ))
        })
    });

    for size in [64usize, 1024, 64 * 1024] {
        let payload = random_payload(size);
        let declared = sha512_hex(&payload);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("payload_matches", size), &payload, |b, p| {
            b.iter(|| black_box(payload_matches(black_box(p), &declared)))
        });
    }

    group.finish();
}

pub fn bench_batch_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-10/validate_batch");
    group.measurement_time(Duration::from_secs(10));
    let validator = quiet_validator();

    for txns in [1usize, 10, 100] {
        let batch = valid_batch(&Secp256k1KeyPair::generate(), txns);
        group.throughput(Throughput::Elements(txns as u64));
        group.bench_with_input(BenchmarkId::from_parameter(txns), &batch, |b, batch| {
            b.iter(|| black_box(validator.validate_batch(batch)))
        });
    }

    group.finish();
}

pub fn bench_block_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-10/validate_block");
    group.measurement_time(Duration::from_secs(10));
    let validator = quiet_validator();

    for batches in [1usize, 10, 50] {
        let block = valid_block(batches, 5);
        group.throughput(Throughput::Elements((batches * 5) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(batches), &block, |b, block| {
            b.iter(|| black_box(validator.validate_block(block)))
        });
    }

    group.finish();
}

pub fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("qc-10/dispatch");
    group.measurement_time(Duration::from_secs(10));

    let dispatcher = Dispatcher::with_signature_verifiers(quiet_validator());
    let connection = ConnectionId::from("bench");
    let messages: Vec<Vec<u8>> = (0..32).map(|_| gossip_block(&valid_block(2, 4))).collect();
    group.throughput(Throughput::Elements(messages.len() as u64));

    group.bench_function("gossip_blocks_sequential", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(dispatcher.dispatch(&connection, MessageType::GossipMessage, message))
                    .ok();
            }
        })
    });

    group.bench_function("gossip_blocks_parallel", |b| {
        b.iter(|| {
            messages.par_iter().for_each(|message| {
                black_box(dispatcher.dispatch(&connection, MessageType::GossipMessage, message))
                    .ok();
            })
        })
    });

    // Early exit: first transaction of the first batch is forged
    let mut forged = valid_block(10, 10);
    forged.batches[0].transactions[0].payload.push(0);
    let forged = gossip_block(&forged);
    group.throughput(Throughput::Elements(1));
    group.bench_function("forged_block_early_exit", |b| {
        b.iter(|| black_box(dispatcher.dispatch(&connection, MessageType::GossipMessage, &forged)))
    });

    group.finish();
}
