//! Checksum-style bucket routing

use crc32fast::Hasher;

/// CRC-32 (IEEE) of the key bytes.
pub fn checksum(bytes: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Reduces a key's checksum to a bucket index in `[0, bucket_count)`.
pub fn bucket_for(bytes: &[u8], bucket_count: usize) -> usize {
    debug_assert!(bucket_count > 0);
    checksum(bytes) as usize % bucket_count
}
