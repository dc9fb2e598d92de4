//! # ECDSA Signatures (secp256k1)
//!
//! ECDSA signatures over the secp256k1 curve.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalized signatures
//! - Constant-time operations
//!
//! ## Key Material
//!
//! - Private key: 32-byte scalar
//! - Public key: 33-byte compressed SEC1 point (0x02/0x03 prefix)
//! - Signature: 64 bytes, r||s

use crate::{CryptoBackend, CryptoError};
use k256::ecdsa::{
    signature::{Signer, Verifier},
    Signature, SigningKey, VerifyingKey,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

/// secp256k1 scalar length.
pub const SECP256K1_PRIVATE_KEY_SIZE: usize = 32;
/// Compressed SEC1 public key length.
pub const SECP256K1_PUBLIC_KEY_SIZE: usize = 33;
/// r||s signature length.
pub const SECP256K1_SIGNATURE_SIZE: usize = 64;

/// Attempts before giving up on drawing a valid scalar.
const MAX_KEYGEN_ATTEMPTS: usize = 16;

/// secp256k1 ECDSA identity backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Secp256k1Backend;

impl Secp256k1Backend {
    /// Create the backend.
    pub fn new() -> Self {
        Self
    }

    fn signing_key(private_key: &[u8]) -> Result<SigningKey, CryptoError> {
        CryptoError::check_len(SECP256K1_PRIVATE_KEY_SIZE, private_key.len())?;
        SigningKey::from_slice(private_key).map_err(|_| CryptoError::InvalidPrivateKey)
    }

    fn compressed(verifying_key: &VerifyingKey) -> Vec<u8> {
        // SEC1 compressed: 0x02/0x03 prefix followed by the 32-byte x-coordinate
        verifying_key.to_sec1_bytes().to_vec()
    }
}

impl CryptoBackend for Secp256k1Backend {
    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn private_key_size(&self) -> usize {
        SECP256K1_PRIVATE_KEY_SIZE
    }

    fn public_key_size(&self) -> usize {
        SECP256K1_PUBLIC_KEY_SIZE
    }

    fn signature_size(&self) -> usize {
        SECP256K1_SIGNATURE_SIZE
    }

    fn deterministic_signatures(&self) -> bool {
        true
    }

    fn generate_key(&self) -> Result<(Vec<u8>, Vec<u8>), CryptoError> {
        let mut bytes = Zeroizing::new([0u8; SECP256K1_PRIVATE_KEY_SIZE]);
        // Zero and values >= n are not valid scalars; redraw
        for _ in 0..MAX_KEYGEN_ATTEMPTS {
            OsRng
                .try_fill_bytes(&mut bytes[..])
                .map_err(|e| CryptoError::KeyGenerationFailed(e.to_string()))?;

            if let Ok(signing_key) = SigningKey::from_slice(&bytes[..]) {
                let public_key = Self::compressed(signing_key.verifying_key());
                return Ok((bytes.to_vec(), public_key));
            }
        }
        Err(CryptoError::KeyGenerationFailed(
            "no valid secp256k1 scalar drawn".to_string(),
        ))
    }

    fn private_to_public(&self, private_key: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(private_key)?;
        Ok(Self::compressed(signing_key.verifying_key()))
    }

    fn sign(&self, private_key: &[u8], message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signing_key = Self::signing_key(private_key)?;
        let sig: Signature = signing_key
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
        CryptoError::check_len(SECP256K1_PUBLIC_KEY_SIZE, public_key.len())?;
        // Validate it's a valid compressed point
        let verifying_key =
            VerifyingKey::from_sec1_bytes(public_key).map_err(|_| CryptoError::InvalidPublicKey)?;

        let Ok(sig) = Signature::from_slice(signature) else {
            return Ok(false);
        };

        Ok(verifying_key.verify(message, &sig).is_ok())
    }
}
