//! Kademlia distance calculations.

use crate::domain::{Distance, PeerId, PeerIdentityError};
use std::cmp::Ordering;

/// Byte-wise XOR over the common prefix of `a` and `b`.
///
/// The result has `min(a.len(), b.len())` bytes; bytes past the shorter
/// operand are dropped, not zero-extended.
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
    a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

fn checked_xor_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>, PeerIdentityError> {
    if a.len() != b.len() {
        return Err(PeerIdentityError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(xor_bytes(a, b))
}

/// Number of leading zero bits in `bytes`.
///
/// For the first non-zero byte at index `i` this is `8 * i` plus that
/// byte's leading zeros. An all-zero input returns `len * 8 - 1`, so
/// identical 256-bit digests land in bucket 255 alongside peers that differ
/// only in the final bit. An empty input returns 0.
pub fn prefix_len(bytes: &[u8]) -> usize {
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != 0 {
            return i * 8 + byte.leading_zeros() as usize;
        }
    }
    (bytes.len() * 8).saturating_sub(1)
}

impl PeerId {
    /// XOR of the raw public keys.
    ///
    /// The result keeps `self`'s address and carries no digest. Truncates to
    /// the shorter key; use [`checked_xor`](Self::checked_xor) to reject
    /// mismatched lengths instead.
    pub fn xor(&self, other: &PeerId) -> PeerId {
        PeerId::from_parts(
            self.address().to_string(),
            xor_bytes(self.public_key(), other.public_key()),
            Vec::new(),
        )
    }

    /// XOR of the digests: the Kademlia distance between two identities.
    ///
    /// The result keeps `self`'s address and carries no public key. Truncates
    /// to the shorter digest; use [`checked_xor_id`](Self::checked_xor_id) to
    /// reject mismatched lengths instead.
    pub fn xor_id(&self, other: &PeerId) -> PeerId {
        PeerId::from_parts(
            self.address().to_string(),
            Vec::new(),
            xor_bytes(self.id(), other.id()),
        )
    }

    /// [`xor`](Self::xor) that fails on public keys of different lengths.
    pub fn checked_xor(&self, other: &PeerId) -> Result<PeerId, PeerIdentityError> {
        Ok(PeerId::from_parts(
            self.address().to_string(),
            checked_xor_bytes(self.public_key(), other.public_key())?,
            Vec::new(),
        ))
    }

    /// [`xor_id`](Self::xor_id) that fails on digests of different lengths.
    pub fn checked_xor_id(&self, other: &PeerId) -> Result<PeerId, PeerIdentityError> {
        Ok(PeerId::from_parts(
            self.address().to_string(),
            Vec::new(),
            checked_xor_bytes(self.id(), other.id())?,
        ))
    }

    /// Leading zero bits of the digest. See [`prefix_len`].
    pub fn prefix_len(&self) -> usize {
        prefix_len(self.id())
    }
}

/// Calculate the XOR distance between two peers
///
/// # Properties
/// - Symmetric: `xor_distance(a, b) == xor_distance(b, a)`
/// - Self is max: `xor_distance(a, a)` returns bucket `len*8 - 1` (closest)
/// - Identifies correct bucket based on first differing bit
///
/// Lower values mean the peers are "farther" in XOR space (they differ
/// early); higher values mean they share more leading bits.
pub fn xor_distance(a: &PeerId, b: &PeerId) -> Distance {
    Distance::new(bucket_for_peer(a, b))
}

/// Calculate the bucket index for a remote peer relative to the local one.
///
/// Bucket index equals the XOR distance, determining which k-bucket
/// stores peers at that distance range.
pub fn calculate_bucket_index(local: &PeerId, remote: &PeerId) -> usize {
    xor_distance(local, remote).bucket_index()
}

/// Fused bucket lookup without building the intermediate XOR identity.
///
/// Same result as `local.xor_id(remote).prefix_len()`.
#[inline]
pub fn bucket_for_peer(local: &PeerId, remote: &PeerId) -> usize {
    let local_bytes = local.id();
    let remote_bytes = remote.id();
    let len = local_bytes.len().min(remote_bytes.len());

    for i in 0..len {
        let xor = local_bytes[i] ^ remote_bytes[i];
        if xor != 0 {
            return i * 8 + xor.leading_zeros() as usize;
        }
    }

    // Identical over the compared length
    (len * 8).saturating_sub(1)
}

/// Order `a` and `b` by XOR distance to `target`, closest first.
///
/// Compares the XOR digests lexicographically, which is a total order on
/// distance for equal-length digests.
pub fn compare_distance(target: &PeerId, a: &PeerId, b: &PeerId) -> Ordering {
    let dist_a = xor_bytes(a.id(), target.id());
    let dist_b = xor_bytes(b.id(), target.id());
    dist_a.cmp(&dist_b)
}
