//! Peer identity: address, public key and the digest derived from it.

use super::PeerIdentityError;
use overlay_crypto::{digest_to_integer, HashPolicy, U256};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a node in the overlay.
///
/// `id` is `HashPolicy::hash_bytes(public_key)`, computed once at
/// construction. Equality, hashing and ordering use `id` only: two values
/// with the same public key are the same identity whatever their address.
#[derive(Debug, Clone)]
pub struct PeerId {
    public_key: Vec<u8>,
    address: String,
    id: Vec<u8>,
}

impl PeerId {
    /// Build an identity from a transport address and a public key.
    ///
    /// The address is opaque and never validated. Public key length is the
    /// backend's concern; see `IdentityService::create_id` for a checked path.
    ///
    /// # Errors
    /// - `PeerIdentityError::Crypto` if the hash policy fails
    /// - `PeerIdentityError::DigestLengthMismatch` if the policy breaks its declared length
    pub fn create<H: HashPolicy + ?Sized>(
        address: impl Into<String>,
        public_key: impl Into<Vec<u8>>,
        policy: &H,
    ) -> Result<Self, PeerIdentityError> {
        let public_key = public_key.into();
        let id = policy.hash_bytes(&public_key)?;
        if id.len() != policy.digest_len() {
            return Err(PeerIdentityError::DigestLengthMismatch {
                policy: policy.name(),
                expected: policy.digest_len(),
                actual: id.len(),
            });
        }
        Ok(Self {
            public_key,
            address: address.into(),
            id,
        })
    }

    pub(crate) fn from_parts(address: String, public_key: Vec<u8>, id: Vec<u8>) -> Self {
        Self {
            public_key,
            address,
            id,
        }
    }

    /// Build a value with a given digest and no public key.
    ///
    /// For fixtures that need bit-exact digests.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn with_digest(address: impl Into<String>, id: impl Into<Vec<u8>>) -> Self {
        Self::from_parts(address.into(), Vec::new(), id.into())
    }

    /// Transport address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Raw public key bytes.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Digest bytes.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Strict ordering on digests.
    pub fn less(&self, other: &Self) -> bool {
        self < other
    }

    /// Lowercase hex of the public key.
    pub fn public_key_hex(&self) -> String {
        hex::encode(&self.public_key)
    }

    /// Lowercase hex of the digest.
    pub fn id_hex(&self) -> String {
        hex::encode(&self.id)
    }

    /// Digest read as an unsigned big-endian integer.
    pub fn id_integer(&self) -> Result<U256, PeerIdentityError> {
        Ok(digest_to_integer(&self.id)?)
    }
}

impl PartialEq for PeerId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PeerId {}

impl Hash for PeerId {
    fn hash<S: Hasher>(&self, state: &mut S) {
        self.id.hash(state);
    }
}

impl PartialOrd for PeerId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PeerId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// Diagnostic only; not a stable or parseable format.
impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID{{Address: {}, Id: {}}}", self.address, self.id_hex())
    }
}
