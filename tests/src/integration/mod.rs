//! Integration tests across overlay-crypto, overlay-peer and overlay-telemetry.
//!
//! Every flow runs against each signature scheme and hash algorithm pairing
//! listed in [`ALL_CONFIGS`].

use overlay_crypto::{CryptoConfig, HashAlgorithm, SignatureScheme};

mod identity_flows;

/// Every supported hash algorithm and signature scheme pairing.
pub const ALL_CONFIGS: [CryptoConfig; 4] = [
    CryptoConfig {
        hash_algorithm: HashAlgorithm::Blake3,
        signature_scheme: SignatureScheme::Ed25519,
    },
    CryptoConfig {
        hash_algorithm: HashAlgorithm::Sha256,
        signature_scheme: SignatureScheme::Ed25519,
    },
    CryptoConfig {
        hash_algorithm: HashAlgorithm::Blake3,
        signature_scheme: SignatureScheme::Secp256k1,
    },
    CryptoConfig {
        hash_algorithm: HashAlgorithm::Sha256,
        signature_scheme: SignatureScheme::Secp256k1,
    },
];
