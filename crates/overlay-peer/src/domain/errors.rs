//! Domain Errors for Peer Identity

use overlay_crypto::CryptoError;
use thiserror::Error;

/// Errors that can occur while building or comparing peer identities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeerIdentityError {
    /// Hashing, key handling or signing failed in the crypto backend
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Hash policy returned a digest of the wrong length
    #[error("Hash policy {policy} returned {actual} bytes, declared {expected}")]
    DigestLengthMismatch {
        /// Policy name
        policy: &'static str,
        /// Declared digest length
        expected: usize,
        /// Digest length actually produced
        actual: usize,
    },

    /// XOR operands differ in length
    #[error("XOR operands differ in length: {left} vs {right} bytes")]
    LengthMismatch {
        /// Length of the left operand
        left: usize,
        /// Length of the right operand
        right: usize,
    },
}

impl PeerIdentityError {
    /// Whether this error reports malformed or wrong-length key material.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, Self::Crypto(e) if e.is_invalid_key())
    }
}
