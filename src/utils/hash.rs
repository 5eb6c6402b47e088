//! Content hashing for raw document bytes.

use xxhash_rust::xxh3::xxh3_64;

/// Hash raw document content.
///
/// Two documents with the same hash are treated as identical by the
/// differencer and never walked.
pub fn content_hash(data: &[u8]) -> u64 {
    xxh3_64(data)
}
