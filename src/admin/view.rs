//! Administrative view
//!
//! Wraps a `CredentialStore` and grants enumeration of all usernames on
//! top of the standard operations. Holding a view is the only privilege
//! gate; there is no further authorization layer.

use crate::error::RegistryError;
use crate::registry::record::UserRecord;
use crate::registry::results::UserSummary;
use crate::registry::store::CredentialStore;

/// Privileged view over a credential store.
///
/// Composes rather than extends the store: the view owns its store and
/// delegates every standard operation to it.
pub struct AdministrativeView {
    store: CredentialStore,
}

impl AdministrativeView {
    /// Takes ownership of the store it administers.
    pub fn new(store: CredentialStore) -> Self {
        Self { store }
    }

    pub fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), RegistryError> {
        self.store.register(username, email, password)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), RegistryError> {
        self.store.authenticate(username, password)
    }

    pub fn remove(&mut self, username: &str) -> Result<(), RegistryError> {
        self.store.remove(username)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.store.get(username)
    }

    pub fn snapshot(&self) -> Vec<UserSummary> {
        self.store.snapshot()
    }

    /// Returns all registered usernames, order unspecified.
    pub fn usernames(&self) -> Vec<String> {
        self.store
            .snapshot()
            .into_iter()
            .map(|user| user.username)
            .collect()
    }
}
