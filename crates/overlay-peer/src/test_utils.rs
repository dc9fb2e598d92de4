//! Test utilities for peer identities.
//!
//! Hash policies with predictable digests, for fixtures that need to pin
//! exact digest bytes. Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use overlay_peer::test_utils::IdentityHash;
//! use overlay_peer::PeerId;
//!
//! let id = PeerId::create("node-a", vec![0x00, 0x0F], &IdentityHash::new(2)).unwrap();
//! assert_eq!(id.prefix_len(), 12);
//! ```

use overlay_crypto::{blake3_hash, CryptoError, HashPolicy};

/// A hash policy whose digest is the input itself.
///
/// Inputs are zero-padded or truncated to `len` bytes so the declared digest
/// length always holds.
#[derive(Debug, Clone, Copy)]
pub struct IdentityHash {
    len: usize,
}

impl IdentityHash {
    /// Create a policy producing `len`-byte digests.
    pub fn new(len: usize) -> Self {
        Self { len }
    }
}

impl HashPolicy for IdentityHash {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn digest_len(&self) -> usize {
        self.len
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut digest = data.to_vec();
        digest.resize(self.len, 0);
        Ok(digest)
    }
}

/// BLAKE3 truncated to the first `len` bytes (at most 32).
///
/// Useful for exercising digest-length mismatches between policies.
#[derive(Debug, Clone, Copy)]
pub struct TruncatedHash {
    len: usize,
}

impl TruncatedHash {
    /// Create a truncated policy; `len` is clamped to 32.
    pub fn new(len: usize) -> Self {
        Self { len: len.min(32) }
    }
}

impl HashPolicy for TruncatedHash {
    fn name(&self) -> &'static str {
        "blake3-truncated"
    }

    fn digest_len(&self) -> usize {
        self.len
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(blake3_hash(data)[..self.len].to_vec())
    }
}
