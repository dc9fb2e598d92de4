//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Key generation failed (entropy source or backend failure)
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Invalid public key
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// Hash policy could not produce a digest
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    /// Digest does not fit the fixed-width integer keyspace
    #[error("Digest too wide for integer keyspace: max {max} bytes, got {actual}")]
    DigestTooWide {
        /// Widest digest accepted, in bytes
        max: usize,
        /// Actual digest length in bytes
        actual: usize,
    },
}

impl CryptoError {
    /// Whether this error reports malformed or wrong-length key material.
    pub fn is_invalid_key(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyLength { .. } | Self::InvalidPublicKey | Self::InvalidPrivateKey
        )
    }

    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::InvalidKeyLength { expected, actual })
        }
    }
}

/// Backend configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown hash algorithm name
    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    /// Unknown signature scheme name
    #[error("Unknown signature scheme: {0}")]
    UnknownSignatureScheme(String),

    /// Config file could not be read
    #[cfg(feature = "toml-config")]
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema
    #[cfg(feature = "toml-config")]
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
