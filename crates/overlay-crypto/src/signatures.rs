//! # Ed25519 Signatures
//!
//! Twisted Edwards curve signatures with deterministic nonces.
//!
//! ## Key Material
//!
//! - Private key: 32-byte seed
//! - Public key: 32-byte compressed Edwards point
//! - Signature: 64 bytes, deterministic (no RNG needed to sign)

use crate::{CryptoBackend, CryptoError};
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// Ed25519 seed length.
pub const ED25519_PRIVATE_KEY_SIZE: usize = 32;
/// Ed25519 public key length.
pub const ED25519_PUBLIC_KEY_SIZE: usize = 32;
/// Ed25519 signature length.
pub const ED25519_SIGNATURE_SIZE: usize = 64;

/// Ed25519 identity backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ed25519Backend;

impl Ed25519Backend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }

    fn signing_key(private_key: &[u8]) -> Result<SigningKey, CryptoError> {
        let seed: Zeroizing<[u8; ED25519_PRIVATE_KEY_SIZE]> =
            Zeroizing::new(private_key.try_into().map_err(|_| {
                CryptoError::InvalidKeyLength {
                    expected: ED25519_PRIVATE_KEY_SIZE,
                    actual: private_key.len(),
                }
            })?);
        Ok(SigningKey::from_bytes(&seed))
    }
}

impl CryptoBackend for Ed25519Backend {
    fn name(&self) -> &'static str {
        "ed25519"
    }

    fn private_key_size(&self) -> usize {
        ED25519_PRIVATE_KEY_SIZE
    }

    fn public_key_size(&self) -> usize {
        ED25519_PUBLIC_KEY_SIZE
    }

    fn signature_size(&self) -> usize {
        ED25519_SIGNATURE_SIZE
    }

    fn deterministic_signatures(&self) -> bool {
        true
    }

    fn generate_key(&self) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
        let mut seed = Zeroizing::new([0u8; ED25519_PRIVATE_KEY_SIZE]);
        OsRng
            .try_fill_bytes(&mut seed[..])
            .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;

        let signing_key = SigningKey::from_bytes(&seed);
        let public_key = signing_key.verifying_key().to_bytes().to_vec();
        Ok((seed.to_vec(), public_key))
    }

    fn private_to_public(&self, private_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(private_key)?;
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(private_key)?;
        let sig = signing_key
            .try_sign(message)
            .map_err(|e| CryptoError::SigningFailed(e.to_string()))?;
        Ok(sig.to_bytes().to_vec())
    }

    fn try_verify(
        &self,
        public_key: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, CryptoError> {
        let bytes: [u8; ED25519_PUBLIC_KEY_SIZE] =
            public_key
                .try_into()
                .map_err(|_| CryptoError::InvalidKeyLength {
                    expected: ED25519_PUBLIC_KEY_SIZE,
                    actual: public_key.len(),
                })?;
        // Validate it's a valid point
        let verifying_key =
            VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;

        let Ok(sig) = Signature::from_slice(signature) else {
            return Ok(false);
        };

        Ok(verifying_key.verify(message, &sig).is_ok())
    }
}
