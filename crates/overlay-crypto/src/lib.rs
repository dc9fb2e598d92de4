//! # Overlay Crypto - Pluggable Identity Primitives
//!
//! Hash policies and signature backends that peer identities are built on.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | BLAKE3, SHA-256 | Peer id derivation, integer keyspace |
//! | `backend` | - | `CryptoBackend` capability set, `KeyPair` |
//! | `signatures` | Ed25519 | Node identity signing |
//! | `ecdsa` | secp256k1 | Node identity signing |
//! | `config` | - | Runtime backend selection |
//!
//! ## Security Properties
//!
//! - **Ed25519**: Deterministic nonces, no RNG dependency
//! - **secp256k1**: RFC 6979 deterministic, low-S normalization
//! - **Key generation**: OS entropy; failures surface as `KeyGenerationFailed`
//! - **KeyPair**: private half zeroized on drop
//!
//! ## Example
//!
//! ```rust
//! use overlay_crypto::{CryptoBackend, Ed25519Backend};
//!
//! let backend = Ed25519Backend::new();
//! let pair = backend.random_key_pair().unwrap();
//! let sig = backend.sign(pair.private_key(), b"hello").unwrap();
//! assert!(backend.verify(pair.public_key(), b"hello", &sig));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod config;
pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod signatures;

// Re-exports
pub use backend::{CryptoBackend, KeyPair};
pub use config::{
    ConfiguredBackend, ConfiguredHash, CryptoConfig, HashAlgorithm, SignatureScheme,
    HASH_ALGORITHM_ENV, SIGNATURE_SCHEME_ENV,
};
pub use ecdsa::Secp256k1Backend;
pub use errors::{ConfigError, CryptoError};
pub use hashing::{
    blake3_hash, digest_to_integer, hash_integer, sha256_hash, Blake3Policy, HashPolicy,
    Sha256Policy,
};
pub use primitive_types::U256;
pub use signatures::Ed25519Backend;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
