//! Credential storage
//!
//! Owns the username to record mapping and implements registration,
//! authentication, removal, and snapshot queries. The store is an
//! explicitly constructed instance; there is no global state.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::registry::record::UserRecord;
use crate::registry::results::UserSummary;
use crate::registry::validation::{validate_email, validate_password, validate_username};

/// In-memory store of user credentials, keyed by username
pub struct CredentialStore {
    users: HashMap<String, UserRecord>,
    config: RegistryConfig,
}

impl CredentialStore {
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            users: HashMap::new(),
            config,
        }
    }

    /// Registers a new user.
    ///
    /// Input is sanitized first, then the password is digested and the
    /// record inserted. Fails with `DuplicateUsername` when the username
    /// is already taken; the store is left unchanged on any failure.
    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), RegistryError> {
        validate_username(username, &self.config)?;
        validate_email(email, &self.config)?;
        validate_password(password, &self.config)?;

        if self.users.contains_key(username) {
            return Err(RegistryError::DuplicateUsername(username.to_string()));
        }

        self.users
            .insert(username.to_string(), UserRecord::new(username, email, password));
        info!("Registered user '{}'", username);
        Ok(())
    }

    /// Checks a username/password pair.
    ///
    /// Unknown users and wrong passwords produce the same error value so
    /// callers cannot probe which usernames exist.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), RegistryError> {
        match self.users.get(username) {
            Some(record) if record.verify_password(password) => {
                debug!("Login successful for '{}'", username);
                Ok(())
            }
            _ => Err(RegistryError::InvalidCredentials),
        }
    }

    /// Removes a user, failing with `UserNotFound` when absent.
    pub fn remove(&mut self, username: &str) -> Result<(), RegistryError> {
        match self.users.remove(username) {
            Some(_) => {
                info!("Removed user '{}'", username);
                Ok(())
            }
            None => Err(RegistryError::UserNotFound(username.to_string())),
        }
    }

    /// Returns the number of registered users.
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Transient read access to a stored record.
    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Owned snapshot of all entries, order unspecified.
    ///
    /// Summaries carry no password digest, and mutating the returned
    /// vector does not touch the store.
    pub fn snapshot(&self) -> Vec<UserSummary> {
        self.users
            .values()
            .map(|record| UserSummary {
                username: record.username().to_string(),
                email: record.email().to_string(),
            })
            .collect()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}
