use overlay_crypto::{ConfiguredBackend, ConfiguredHash, CryptoBackend, CryptoConfig, HashPolicy};

/// Identity service over a hash policy `H` and a signature backend `B`.
///
/// # Example
///
/// ```rust
/// use overlay_peer::IdentityService;
/// use overlay_crypto::{Blake3Policy, Ed25519Backend};
///
/// let service = IdentityService::new(Blake3Policy, Ed25519Backend::new());
/// let local = service.generate_local("127.0.0.1:30303").unwrap();
///
/// let sig = service.sign(&local, b"ping").unwrap();
/// assert!(service.verify_peer(local.id(), b"ping", &sig));
/// ```
#[derive(Debug, Clone)]
pub struct IdentityService<H, B> {
    pub(crate) hash_policy: H,
    pub(crate) backend: B,
}

impl<H: HashPolicy, B: CryptoBackend> IdentityService<H, B> {
    /// Create a new identity service.
    ///
    /// # Arguments
    ///
    /// * `hash_policy` - Policy deriving peer ids from public keys
    /// * `backend` - Signature scheme for key pairs and messages
    pub fn new(hash_policy: H, backend: B) -> Self {
        tracing::debug!(
            hash_policy = hash_policy.name(),
            backend = backend.name(),
            "Identity service created"
        );
        Self {
            hash_policy,
            backend,
        }
    }

    /// Hash policy in use.
    pub fn hash_policy(&self) -> &H {
        &self.hash_policy
    }

    /// Signature backend in use.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl IdentityService<ConfiguredHash, ConfiguredBackend> {
    /// Build the service selected by `config`.
    pub fn from_config(config: &CryptoConfig) -> Self {
        Self::new(config.hash_policy(), config.backend())
    }
}
