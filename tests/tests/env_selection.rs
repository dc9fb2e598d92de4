//! Backend selection from environment variables.
//!
//! Kept in its own test binary: it mutates the process environment, which
//! must not race with tests that read it.

use overlay_crypto::{
    CryptoConfig, HashAlgorithm, SignatureScheme, HASH_ALGORITHM_ENV, SIGNATURE_SCHEME_ENV,
};
use overlay_peer::IdentityService;

#[test]
fn test_from_env_selection() {
    std::env::set_var(HASH_ALGORITHM_ENV, "SHA-256");
    std::env::set_var(SIGNATURE_SCHEME_ENV, "not-a-scheme");

    let config = CryptoConfig::from_env();
    assert_eq!(config.hash_algorithm, HashAlgorithm::Sha256);
    assert_eq!(config.signature_scheme, SignatureScheme::Ed25519);

    std::env::set_var(SIGNATURE_SCHEME_ENV, "secp256k1");
    let service = IdentityService::from_config(&CryptoConfig::from_env());
    let local = service.generate_local("a").unwrap();
    assert_eq!(local.key_pair().public_key().len(), 33);

    std::env::remove_var(HASH_ALGORITHM_ENV);
    std::env::remove_var(SIGNATURE_SCHEME_ENV);
    assert_eq!(CryptoConfig::from_env(), CryptoConfig::default());
}
