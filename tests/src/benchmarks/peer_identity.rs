//! # Peer Identity Benchmarks
//!
//! Hot paths to watch:
//! - XOR distance and bucket selection run once per routing-table insert
//! - Sorting by distance runs once per lookup response
//! - Sign/verify run once per handshake
//!
//! Adversarial inputs:
//! - Identical digests (all-zero XOR, full scan)
//! - Digests differing only in the last bit

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use overlay_crypto::{CryptoConfig, HashAlgorithm, SignatureScheme};
use overlay_peer::test_utils::IdentityHash;
use overlay_peer::{bucket_for_peer, compare_distance, IdentityService, PeerId};
use rand::RngCore;
use std::time::Duration;

fn random_digest_peer(policy: &IdentityHash) -> PeerId {
    let mut key = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut key);
    // IdentityHash keeps the key as the digest, so the random bytes are the id
    PeerId::create("bench", key, policy).unwrap()
}

pub fn bench_xor_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/xor_distance");
    group.measurement_time(Duration::from_secs(5));

    let policy = IdentityHash::new(32);
    let a = random_digest_peer(&policy);
    let b = random_digest_peer(&policy);

    group.bench_function("xor_id_256bit", |bench| {
        bench.iter(|| black_box(a.xor_id(&b)))
    });

    group.bench_function("xor_id_then_prefix_len", |bench| {
        bench.iter(|| black_box(a.xor_id(&b).prefix_len()))
    });

    group.bench_function("bucket_for_peer_fused", |bench| {
        bench.iter(|| black_box(bucket_for_peer(&a, &b)))
    });

    // Adversarial: same digest, both loops run to the end
    let twin = PeerId::create("twin", a.id().to_vec(), &policy).unwrap();
    group.bench_function("bucket_for_peer_identical", |bench| {
        bench.iter(|| black_box(bucket_for_peer(&a, &twin)))
    });

    // Adversarial: differs only in the last bit
    let mut last_bit = a.id().to_vec();
    last_bit[31] ^= 1;
    let neighbour = PeerId::create("neighbour", last_bit, &policy).unwrap();
    group.bench_function("bucket_for_peer_last_bit", |bench| {
        bench.iter(|| black_box(bucket_for_peer(&a, &neighbour)))
    });

    group.finish();
}

pub fn bench_sort_by_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/sort_by_distance");
    group.measurement_time(Duration::from_secs(5));

    let policy = IdentityHash::new(32);
    let target = random_digest_peer(&policy);

    for count in [20, 160, 1000] {
        let peers: Vec<PeerId> = (0..count).map(|_| random_digest_peer(&policy)).collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("peers", count), &peers, |bench, peers| {
            bench.iter(|| {
                let mut sorted = peers.clone();
                sorted.sort_by(|a, b| compare_distance(&target, a, b));
                black_box(sorted.len())
            })
        });
    }

    group.finish();
}

pub fn bench_handshake(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay/handshake");
    group.measurement_time(Duration::from_secs(10));

    for scheme in [SignatureScheme::Ed25519, SignatureScheme::Secp256k1] {
        let config = CryptoConfig {
            hash_algorithm: HashAlgorithm::Blake3,
            signature_scheme: scheme,
        };
        let service = IdentityService::from_config(&config);
        let local = service.generate_local("bench").unwrap();
        let nonce = [0x5Au8; 32];
        let sig = service.sign(&local, &nonce).unwrap();

        group.bench_function(BenchmarkId::new("sign", scheme), |bench| {
            bench.iter(|| black_box(service.sign(&local, &nonce).unwrap()))
        });

        group.bench_function(BenchmarkId::new("verify", scheme), |bench| {
            bench.iter(|| black_box(service.verify_peer(local.id(), &nonce, &sig)))
        });

        group.bench_function(BenchmarkId::new("create_id", scheme), |bench| {
            let public_key = local.key_pair().public_key().to_vec();
            bench.iter(|| black_box(service.create_id("peer", public_key.clone()).unwrap()))
        });
    }

    group.finish();
}
