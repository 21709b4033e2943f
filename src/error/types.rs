//! Error types
//!
//! Defines domain-specific error types for the user registry.

use std::fmt;

/// Registry operation errors
///
/// All variants are expected, recoverable outcomes; none of them abort
/// the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateUsername(String),
    InvalidCredentials,
    UserNotFound(String),
    InvalidUsername(String),
    MalformedInput(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateUsername(u) => write!(f, "Username already exists: {}", u),
            RegistryError::InvalidCredentials => write!(f, "Invalid username or password"),
            RegistryError::UserNotFound(u) => write!(f, "User not found: {}", u),
            RegistryError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            RegistryError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
        }
    }
}

impl std::error::Error for RegistryError {}
