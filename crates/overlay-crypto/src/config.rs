//! Backend selection.
//!
//! The hash policy and signature scheme are chosen once, through a
//! [`CryptoConfig`] value handed to whoever builds identities. There is no
//! process-wide default backend.

use crate::{
    Blake3Policy, ConfigError, CryptoBackend, CryptoError, Ed25519Backend, HashPolicy,
    Secp256k1Backend, Sha256Policy,
};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Environment variable selecting the hash policy.
pub const HASH_ALGORITHM_ENV: &str = "OVERLAY_HASH_ALGORITHM";
/// Environment variable selecting the signature scheme.
pub const SIGNATURE_SCHEME_ENV: &str = "OVERLAY_SIGNATURE_SCHEME";

/// Available hash policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "toml-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "toml-config", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// BLAKE3-256
    #[default]
    Blake3,
    /// SHA-256
    Sha256,
}

impl HashAlgorithm {
    /// Build the policy for this algorithm.
    pub fn policy(self) -> ConfiguredHash {
        match self {
            Self::Blake3 => ConfiguredHash::Blake3(Blake3Policy),
            Self::Sha256 => ConfiguredHash::Sha256(Sha256Policy),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blake3 => write!(f, "blake3"),
            Self::Sha256 => write!(f, "sha256"),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blake3" => Ok(Self::Blake3),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            other => Err(ConfigError::UnknownHashAlgorithm(other.to_string())),
        }
    }
}

/// Available signature schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "toml-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "toml-config", serde(rename_all = "lowercase"))]
pub enum SignatureScheme {
    /// Ed25519
    #[default]
    Ed25519,
    /// ECDSA over secp256k1
    Secp256k1,
}

impl SignatureScheme {
    /// Build the backend for this scheme.
    pub fn backend(self) -> ConfiguredBackend {
        match self {
            Self::Ed25519 => ConfiguredBackend::Ed25519(Ed25519Backend::new()),
            Self::Secp256k1 => ConfiguredBackend::Secp256k1(Secp256k1Backend::new()),
        }
    }
}

impl fmt::Display for SignatureScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "ed25519"),
            Self::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

impl FromStr for SignatureScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ed25519" => Ok(Self::Ed25519),
            "secp256k1" | "k256" => Ok(Self::Secp256k1),
            other => Err(ConfigError::UnknownSignatureScheme(other.to_string())),
        }
    }
}

/// Hash policy chosen at runtime from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredHash {
    /// BLAKE3-256
    Blake3(Blake3Policy),
    /// SHA-256
    Sha256(Sha256Policy),
}

impl HashPolicy for ConfiguredHash {
    fn name(&self) -> &'static str {
        match self {
            Self::Blake3(p) => p.name(),
            Self::Sha256(p) => p.name(),
        }
    }

    fn digest_len(&self) -> usize {
        match self {
            Self::Blake3(p) => p.digest_len(),
            Self::Sha256(p) => p.digest_len(),
        }
    }

    fn hash_bytes(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::Blake3(p) => p.hash_bytes(data),
            Self::Sha256(p) => p.hash_bytes(data),
        }
    }
}

/// Signature backend chosen at runtime from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfiguredBackend {
    /// Ed25519
    Ed25519(Ed25519Backend),
    /// ECDSA over secp256k1
    Secp256k1(Secp256k1Backend),
}

impl ConfiguredBackend {
    fn inner(&self) -> &dyn CryptoBackend {
        match self {
            Self::Ed25519(b) => b,
            Self::Secp256k1(b) => b,
        }
    }
}

impl CryptoBackend for ConfiguredBackend {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn private_key_size(&self) -> usize {
        self.inner().private_key_size()
    }

    fn public_key_size(&self) -> usize {
        self.inner().public_key_size()
    }

    fn signature_size(&self) -> usize {
        self.inner().signature_size()
    }

    fn deterministic_signatures(&self) -> bool {
        self.inner().deterministic_signatures()
    }

    fn generate_key(&self) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
        self.inner().generate_key()
    }

    fn private_to_public(&self, private_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.inner().private_to_public(private_key)
    }

    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.inner().sign(private_key, message)
    }

    fn try_verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        self.inner().try_verify(public_key, message, signature)
    }
}

/// Hash policy and signature scheme for one identity service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "toml-config", derive(serde::Deserialize))]
#[cfg_attr(feature = "toml-config", serde(default))]
pub struct CryptoConfig {
    /// Policy used to derive peer identifiers
    pub hash_algorithm: HashAlgorithm,
    /// Scheme used for key pairs and signatures
    pub signature_scheme: SignatureScheme,
}

impl CryptoConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OVERLAY_HASH_ALGORITHM`: `blake3` or `sha256` (default: blake3)
    /// - `OVERLAY_SIGNATURE_SCHEME`: `ed25519` or `secp256k1` (default: ed25519)
    ///
    /// Unset or unrecognised values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            hash_algorithm: env::var(HASH_ALGORITHM_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            signature_scheme: env::var(SIGNATURE_SCHEME_ENV)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Build the configured hash policy.
    pub fn hash_policy(&self) -> ConfiguredHash {
        self.hash_algorithm.policy()
    }

    /// Build the configured signature backend.
    pub fn backend(&self) -> ConfiguredBackend {
        self.signature_scheme.backend()
    }
}

// ============================================================================
// TOML loading (requires "toml-config" feature)
// ============================================================================

#[cfg(feature = "toml-config")]
mod toml_config {
    use super::*;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    struct ConfigFile {
        #[serde(default)]
        crypto: CryptoConfig,
    }

    impl CryptoConfig {
        /// Parse a `[crypto]` table from TOML text.
        ///
        /// # Config File Format
        ///
        /// ```toml
        /// [crypto]
        /// hash_algorithm = "sha256"
        /// signature_scheme = "secp256k1"
        /// ```
        pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile = toml::from_str(content)?;
            Ok(file.crypto)
        }

        /// Load configuration from a TOML file.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path)?;
            Self::from_toml_str(&content)
        }
    }
}
