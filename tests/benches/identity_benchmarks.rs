//! # Overlay Identity Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | XOR metric | `xor_id`, `prefix_len`, fused `bucket_for_peer` |
//! | Lookup | sort peers by distance to a target |
//! | Handshake | `sign`, `verify_peer`, `create_id` per backend |

use criterion::{criterion_group, criterion_main};
use overlay_tests::benchmarks::peer_identity;

criterion_group!(
    benches,
    peer_identity::bench_xor_distance,
    peer_identity::bench_sort_by_distance,
    peer_identity::bench_handshake,
);

criterion_main!(benches);
