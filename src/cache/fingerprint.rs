//! Resource fingerprints.
//!
//! # Responsibilities
//! - Derive a stable validator token from a storage path
//!
//! # Design Decisions
//! - SHA-256 over the path string, hex-encoded, truncated to 16 chars
//! - 64 bits keeps the header small; collisions stay negligible for
//!   catalogs of tens of millions of objects
//! - Never reads object bytes: paths are write-once, so path identity
//!   implies content identity

use sha2::{Digest, Sha256};

/// Hex characters kept from the digest.
const FINGERPRINT_LEN: usize = 16;

/// Compute the validator token for a storage path.
///
/// Deterministic across calls and processes.
pub fn fingerprint(path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let digest = hasher.finalize();
    let mut token = hex::encode(digest);
    token.truncate(FINGERPRINT_LEN);
    token
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fingerprint_is_deterministic() {
        let a = fingerprint("segments/42/last_frame.png");
        let b = fingerprint("segments/42/last_frame.png");
        assert_eq!(a, b);
        assert_eq!(a.len(), FINGERPRINT_LEN);
    }

    #[test]
    fn test_fingerprint_distinguishes_paths() {
        assert_ne!(
            fingerprint("segments/42/last_frame.png"),
            fingerprint("segments/43/last_frame.png")
        );
    }

    #[test]
    fn test_no_collisions_in_large_corpus() {
        let mut seen = HashSet::new();
        for i in 0..10_000 {
            let token = fingerprint(&format!("segments/{i}/frame_{i}.png"));
            assert!(seen.insert(token), "collision at path index {i}");
        }
    }
}
