//! Password hashing
//!
//! One-way SHA-256 digests for stored credentials. Records hold the
//! lowercase hex digest only; plaintext never reaches the store.

use sha2::{Digest, Sha256};

/// Computes the lowercase hex SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Checks a candidate password against a stored digest.
pub fn verify_password(candidate: &str, stored_digest: &str) -> bool {
    digests_match(&hash_password(candidate), stored_digest)
}

/// Compares two digests in constant time with respect to their contents.
///
/// Every byte position is visited regardless of where the first mismatch
/// occurs, so timing does not leak the length of the matching prefix.
fn digests_match(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            hash_password("secure123"),
            "b5692500175fad6bb2b306aa20ff58423c79b130ef310fb3caa924e0f28bc61d"
        );
    }

    #[test]
    fn test_digest_is_not_plaintext() {
        let digest = hash_password("hunter2");
        assert_ne!(digest, "hunter2");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(hash_password("hello123"), hash_password("hello123"));
    }

    #[test]
    fn test_verify_password() {
        let digest = hash_password("secure123");
        assert!(verify_password("secure123", &digest));
        assert!(!verify_password("secure124", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn test_digests_match_rejects_length_mismatch() {
        assert!(!digests_match("abc", "abcd"));
        assert!(digests_match("abcd", "abcd"));
    }
}
