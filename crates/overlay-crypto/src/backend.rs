//! # Cryptographic Identity Backend
//!
//! The capability set a signature scheme must provide to back peer
//! identities: key generation, derivation, signing and verification.
//!
//! Exactly one backend is active per identity service. Concrete backends
//! live in [`crate::signatures`] (Ed25519) and [`crate::ecdsa`] (secp256k1).

use crate::CryptoError;
use std::fmt;
use zeroize::Zeroizing;

/// Pluggable signature scheme backing peer identities.
///
/// All methods except key generation are pure. Backends own their entropy
/// source and must make it safe to use from several threads.
pub trait CryptoBackend: Send + Sync {
    /// Short scheme name for diagnostics.
    fn name(&self) -> &'static str;

    /// Private key length in bytes.
    fn private_key_size(&self) -> usize;

    /// Public key length in bytes.
    fn public_key_size(&self) -> usize;

    /// Signature length in bytes.
    fn signature_size(&self) -> usize;

    /// Whether `sign` returns the same bytes for the same key and message.
    fn deterministic_signatures(&self) -> bool;

    /// Generate a fresh `(private_key, public_key)` pair.
    ///
    /// # Errors
    /// `CryptoError::KeyGenerationFailed` when the entropy source fails.
    fn generate_key(&self) -> Result<(Vec<u8>, Vec<u8>), CryptoError>;

    /// Derive the public key for `private_key`.
    ///
    /// # Errors
    /// `CryptoError::InvalidKeyLength` or `CryptoError::InvalidPrivateKey`.
    fn private_to_public(&self, private_key: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Sign `message` with `private_key`.
    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Check `signature` over `message` under `public_key`.
    ///
    /// `Ok(false)` means the signature was evaluated and rejected, including
    /// malformed signature bytes. `Err` means verification could not be
    /// attempted, e.g. the public key is not a valid point.
    fn try_verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError>;

    /// Generate a key pair packaged as a [`KeyPair`].
    fn random_key_pair(&self) -> Result<KeyPair, CryptoError> {
        let (private_key, public_key) = self.generate_key()?;
        KeyPair::new(self, private_key, public_key)
    }

    /// Boolean verification: any failure is `false`.
    fn verify(&self, public_key: &[u8], message: &[u8], signature: &[u8]) -> bool {
        self.try_verify(public_key, message, signature)
            .unwrap_or(false)
    }
}

impl<B: CryptoBackend + ?Sized> CryptoBackend for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn private_key_size(&self) -> usize {
        (**self).private_key_size()
    }

    fn public_key_size(&self) -> usize {
        (**self).public_key_size()
    }

    fn signature_size(&self) -> usize {
        (**self).signature_size()
    }

    fn deterministic_signatures(&self) -> bool {
        (**self).deterministic_signatures()
    }

    fn generate_key(&self) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
        (**self).generate_key()
    }

    fn private_to_public(&self, private_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).private_to_public(private_key)
    }

    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        (**self).sign(private_key, message)
    }

    fn try_verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        (**self).try_verify(public_key, message, signature)
    }
}

/// Private and public key produced by one backend.
///
/// Immutable once built. The private half is zeroized on drop and never
/// printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    private_key: Zeroizing<Vec<u8>>,
    public_key: Vec<u8>,
}

impl KeyPair {
    /// Package key material, checking both halves against `backend`'s sizes.
    pub fn new<B: CryptoBackend + ?Sized>(
        backend: &B,
        private_key: Vec<u8>,
        public_key: Vec<u8>,
    ) -> Result<Self, CryptoError> {
        let private_key = Zeroizing::new(private_key);
        CryptoError::check_len(backend.private_key_size(), private_key.len())?;
        CryptoError::check_len(backend.public_key_size(), public_key.len())?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Rebuild a key pair from a stored private key.
    pub fn from_private_key<B: CryptoBackend + ?Sized>(
        backend: &B,
        private_key: Vec<u8>,
    ) -> Result<Self, CryptoError> {
        let public_key = backend.private_to_public(&private_key)?;
        Self::new(backend, private_key, public_key)
    }

    /// Private key bytes.
    pub fn private_key(&self) -> &[u8] {
        &self.private_key
    }

    /// Public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &hex::encode(&self.public_key))
            .finish()
    }
}
