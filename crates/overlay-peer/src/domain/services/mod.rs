//! Domain Services - Pure functions for Kademlia distance
//!
//! All functions in this module are pure (no I/O, no state mutation)
//! and deterministic (same inputs → same outputs).

mod distance;

pub use distance::{
    bucket_for_peer, calculate_bucket_index, compare_distance, prefix_len, xor_bytes,
    xor_distance,
};
