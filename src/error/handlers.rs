//! Error handlers
//!
//! Provides error reporting helpers for registry operations.

use crate::error::types::RegistryError;
use log::warn;

/// Log a registry error
pub fn handle_error(err: &RegistryError) {
    warn!("Registry error: {}", err);
}

/// Convert an error to a short stable status tag for transcript lines
pub fn error_tag(err: &RegistryError) -> &'static str {
    match err {
        RegistryError::DuplicateUsername(_) => "duplicate-username",
        RegistryError::InvalidCredentials => "invalid-credentials",
        RegistryError::UserNotFound(_) => "user-not-found",
        RegistryError::InvalidUsername(_) => "invalid-username",
        RegistryError::MalformedInput(_) => "malformed-input",
    }
}
