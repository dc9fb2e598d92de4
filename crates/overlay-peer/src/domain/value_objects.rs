//! Value Objects for Peer Identity

/// Result of XOR distance calculation between two peers
///
/// The distance is the number of leading zero bits of the XOR of two peer
/// digests, which is also the routing-table bucket index. For 256-bit
/// digests the range is 0-255: identical digests map to 255, the same
/// bucket as peers differing only in the last bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Distance(pub usize);

impl Distance {
    /// Create a new Distance value
    pub fn new(bucket_index: usize) -> Self {
        Self(bucket_index)
    }

    /// Get the bucket index
    pub fn bucket_index(&self) -> usize {
        self.0
    }

    /// Largest distance value for digests of `digest_len` bytes
    pub fn max_for(digest_len: usize) -> Self {
        Self((digest_len * 8).saturating_sub(1))
    }
}
