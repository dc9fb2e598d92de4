//! # Overlay Peer Identity
//!
//! Peer identities and the XOR distance metric for a Kademlia-style
//! overlay network.
//!
//! A [`PeerId`] binds a transport address to a public key and to the digest
//! of that key under a pluggable [`HashPolicy`](overlay_crypto::HashPolicy).
//! Distance between two identities is the XOR of their digests, and the
//! routing bucket for a peer is the number of leading zero bits of that XOR.
//!
//! ## Architecture
//!
//! - **Domain Layer:** `PeerId`, `LocalIdentity`, `Distance` and the pure
//!   XOR metric functions
//! - **Service Layer:** `IdentityService`, which wires a hash policy and a
//!   signature backend to the domain
//!
//! Hashing and signing live in `overlay-crypto`; this crate never names a
//! concrete algorithm outside of tests.
//!
//! ## Example
//!
//! ```rust
//! use overlay_crypto::{Blake3Policy, Ed25519Backend};
//! use overlay_peer::IdentityService;
//!
//! let service = IdentityService::new(Blake3Policy, Ed25519Backend::new());
//!
//! let local = service.generate_local("10.0.0.1:30303").unwrap();
//! let remote = service.generate_local("10.0.0.2:30303").unwrap();
//!
//! let sig = service.sign(&local, b"PING").unwrap();
//! assert!(service.verify_peer(local.id(), b"PING", &sig));
//!
//! let bucket = service.bucket_index(local.id(), remote.id());
//! assert!(bucket < 256);
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod domain;
pub mod service;

/// Test utilities (IdentityHash, TruncatedHash)
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// CORE RE-EXPORTS
// =============================================================================

// Domain entities
pub use domain::{Distance, LocalIdentity, PeerId, PeerIdentityError};

// Domain services
pub use domain::{
    bucket_for_peer, calculate_bucket_index, compare_distance, prefix_len, xor_bytes,
    xor_distance,
};

// Service
pub use service::IdentityService;
