use super::IdentityService;
use crate::domain::{calculate_bucket_index, LocalIdentity, PeerId, PeerIdentityError};
use overlay_crypto::{CryptoBackend, CryptoError, HashPolicy, KeyPair};
use overlay_telemetry::log_peer_event;

const COMPONENT: &str = "overlay-peer";

impl<H: HashPolicy, B: CryptoBackend> IdentityService<H, B> {
    /// Build a remote peer's identity from its handshake data.
    ///
    /// # Errors
    /// `CryptoError::InvalidKeyLength` if `public_key` does not match the
    /// backend's public key size.
    pub fn create_id(
        &self,
        address: impl Into<String>,
        public_key: impl Into<Vec<u8>>,
    ) -> Result<PeerId, PeerIdentityError> {
        let public_key = public_key.into();
        let expected = self.backend.public_key_size();
        if public_key.len() != expected {
            return Err(CryptoError::InvalidKeyLength {
                expected,
                actual: public_key.len(),
            }
            .into());
        }

        let id = PeerId::create(address, public_key, &self.hash_policy)?;
        log_peer_event!(
            debug,
            COMPONENT,
            "Peer identity created",
            id.id_hex(),
            address = id.address()
        );
        Ok(id)
    }

    /// Generate the local node's key pair and identity.
    pub fn generate_local(
        &self,
        address: impl Into<String>,
    ) -> Result<LocalIdentity, PeerIdentityError> {
        let key_pair = self.backend.random_key_pair()?;
        let local = self.local_from_key_pair(address, key_pair)?;
        log_peer_event!(
            debug,
            COMPONENT,
            "Local identity generated",
            local.id().id_hex(),
            backend = self.backend.name()
        );
        Ok(local)
    }

    /// Rebuild the local identity from a stored private key.
    pub fn restore_local(
        &self,
        address: impl Into<String>,
        private_key: Vec<u8>,
    ) -> Result<LocalIdentity, PeerIdentityError> {
        let key_pair = KeyPair::from_private_key(&self.backend, private_key)?;
        self.local_from_key_pair(address, key_pair)
    }

    fn local_from_key_pair(
        &self,
        address: impl Into<String>,
        key_pair: KeyPair,
    ) -> Result<LocalIdentity, PeerIdentityError> {
        let id = PeerId::create(address, key_pair.public_key().to_vec(), &self.hash_policy)?;
        Ok(LocalIdentity::new(key_pair, id))
    }

    /// Sign `message` as the local node.
    pub fn sign(
        &self,
        local: &LocalIdentity,
        message: &[u8],
    ) -> Result<Vec<u8>, PeerIdentityError> {
        Ok(self.backend.sign(local.key_pair().private_key(), message)?)
    }

    /// Check a peer's signature, distinguishing rejection from inability to verify.
    ///
    /// `Ok(false)`: the signature does not match. `Err`: the peer's public key
    /// cannot be used by this backend.
    pub fn try_verify_peer(
        &self,
        peer: &PeerId,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, PeerIdentityError> {
        match self.backend.try_verify(peer.public_key(), message, signature) {
            Ok(true) => Ok(true),
            Ok(false) => {
                log_peer_event!(debug, COMPONENT, "Signature rejected", peer.id_hex());
                Ok(false)
            }
            Err(e) => {
                log_peer_event!(
                    warn,
                    COMPONENT,
                    "Signature could not be verified",
                    peer.id_hex(),
                    error = %e
                );
                Err(e.into())
            }
        }
    }

    /// Boolean form of [`try_verify_peer`](Self::try_verify_peer).
    pub fn verify_peer(&self, peer: &PeerId, message: &[u8], signature: &[u8]) -> bool {
        self.try_verify_peer(peer, message, signature)
            .unwrap_or(false)
    }

    /// Routing-table bucket for `remote` as seen from `local`.
    pub fn bucket_index(&self, local: &PeerId, remote: &PeerId) -> usize {
        calculate_bucket_index(local, remote)
    }
}
