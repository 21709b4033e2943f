//! Module `record`
//!
//! Defines the `UserRecord` struct holding a registered user's identity
//! and password digest. All fields are immutable after construction.

use crate::registry::hashing;

/// A stored user entry.
///
/// The password digest is computed exactly once, in the constructor; the
/// plaintext password is dropped when `new` returns.
#[derive(Debug, Clone)]
pub struct UserRecord {
    username: String,
    email: String,
    password_hash: String,
}

impl UserRecord {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hashing::hash_password(password),
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    /// Returns the username keying this record.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the email address as given at registration.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the lowercase hex digest of the password.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Checks a candidate password against the stored digest.
    pub fn verify_password(&self, candidate: &str) -> bool {
        hashing::verify_password(candidate, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_never_stores_plaintext() {
        let record = UserRecord::new("anano", "anano@example.com", "secure123");
        assert_ne!(record.password_hash(), "secure123");
        assert_eq!(record.password_hash().len(), 64);
    }

    #[test]
    fn test_record_verifies_own_password() {
        let record = UserRecord::new("anano", "anano@example.com", "secure123");
        assert!(record.verify_password("secure123"));
        assert!(!record.verify_password("secure124"));
    }
}
