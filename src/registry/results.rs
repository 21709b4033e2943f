//! Registry result types
//!
//! Defines result structures returned by registry queries.

/// Owned snapshot of a stored user, without the password digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub username: String,
    pub email: String,
}
