//! # Hash Policies
//!
//! A hash policy maps arbitrary bytes to a fixed-length digest. Peer
//! identifiers are the digest of a public key under the active policy.
//!
//! | Policy | Digest | Notes |
//! |--------|--------|-------|
//! | `Blake3Policy` | 32 bytes | Default, SIMD-accelerated |
//! | `Sha256Policy` | 32 bytes | Interop with SHA-256 node ids |
//!
//! ## Integer keyspace
//!
//! [`hash_integer`] is the numeric view of the same primitive: the input is
//! encoded as a fixed 32-byte unsigned big-endian value and the digest is read
//! back the same way, so there is no sign bit and no leading-zero ambiguity.

use crate::CryptoError;
use primitive_types::U256;
use sha2::{Digest, Sha256};

/// BLAKE3 hash output (256-bit).
pub type Hash = [u8; 32];

/// Width of the integer keyspace in bytes.
pub const INTEGER_BYTES: usize = 32;

/// Deterministic, fixed-length digest function.
///
/// The same input under the same policy always yields the same digest, and
/// every digest is exactly [`digest_len`](HashPolicy::digest_len) bytes.
pub trait HashPolicy: Send + Sync {
    /// Short policy name for diagnostics.
    fn name(&self) -> &'static str;

    /// Digest length in bytes.
    fn digest_len(&self) -> usize;

    /// Hash `data` into a digest.
    ///
    /// # Errors
    /// `CryptoError::HashingFailed` when an external hashing backend is unavailable.
    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

impl<P: HashPolicy + ?Sized> HashPolicy for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn digest_len(&self) -> usize {
        (**self).digest_len()
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).hash_bytes(data)
    }
}

/// BLAKE3-256 hash policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blake3Policy;

impl HashPolicy for Blake3Policy {
    fn name(&self) -> &'static str {
        "blake3"
    }

    fn digest_len(&self) -> usize {
        32
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(blake3_hash(data).to_vec())
    }
}

/// SHA-256 hash policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Policy;

impl HashPolicy for Sha256Policy {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn digest_len(&self) -> usize {
        32
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(sha256_hash(data).to_vec())
    }
}

/// Hash data with BLAKE3 (one-shot).
pub fn blake3_hash(data: &[u8]) -> Hash {
    *blake3::hash(data).as_bytes()
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256_hash(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Interpret a digest as an unsigned big-endian integer.
///
/// # Errors
/// `CryptoError::DigestTooWide` if the digest is longer than 32 bytes.
pub fn digest_to_integer(digest: &[u8]) -> Result<U256, CryptoError> {
    if digest.len() > INTEGER_BYTES {
        return Err(CryptoError::DigestTooWide {
            max: INTEGER_BYTES,
            actual: digest.len(),
        });
    }
    Ok(U256::from_big_endian(digest))
}

/// Hash an integer under `policy`, returning the digest as an integer.
pub fn hash_integer<P: HashPolicy + ?Sized>(policy: &P, value: U256) -> Result<U256, CryptoError> {
    let mut input = [0u8; INTEGER_BYTES];
    value.to_big_endian(&mut input);
    let digest = policy.hash_bytes(&input)?;
    digest_to_integer(&digest)
}
