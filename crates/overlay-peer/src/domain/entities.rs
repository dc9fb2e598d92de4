//! Domain Entities for Peer Identity

use super::PeerId;
use overlay_crypto::KeyPair;

/// The local node: its one key pair and the identity derived from it.
///
/// `id().public_key()` always equals `key_pair().public_key()`.
#[derive(Debug, Clone)]
pub struct LocalIdentity {
    key_pair: KeyPair,
    id: PeerId,
}

impl LocalIdentity {
    pub(crate) fn new(key_pair: KeyPair, id: PeerId) -> Self {
        Self { key_pair, id }
    }

    /// Key pair used to sign outgoing messages.
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Identity announced to other peers.
    pub fn id(&self) -> &PeerId {
        &self.id
    }

    /// Drop the key pair, keeping the public identity.
    pub fn into_peer_id(self) -> PeerId {
        self.id
    }
}
