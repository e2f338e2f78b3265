//! High-level API for the bearer access token.

use crate::{StorageKeys, StorageResult, TokenStorage};

/// Facade over a storage backend holding the single access token.
///
/// Reads fail open: a broken backend reads as "no token", which downgrades
/// the client to unauthenticated instead of erroring. Writes surface their
/// error so a failed login persist is visible.
pub struct TokenStore {
    storage: Box<dyn TokenStorage>,
}

impl TokenStore {
    /// Create a new token store with the given storage backend.
    pub fn new(storage: Box<dyn TokenStorage>) -> Self {
        Self { storage }
    }

    /// Store the access token, replacing any previous value.
    pub fn set_access_token(&self, token: &str) -> StorageResult<()> {
        self.storage.set(StorageKeys::ACCESS_TOKEN, token)
    }

    /// Retrieve the access token, or `None` if absent or unreadable.
    pub fn access_token(&self) -> Option<String> {
        match self.storage.get(StorageKeys::ACCESS_TOKEN) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Token storage unreadable, treating as no token");
                None
            }
        }
    }

    /// Check whether an access token is present.
    pub fn has_access_token(&self) -> bool {
        self.access_token().is_some()
    }

    /// Delete the access token, best-effort.
    pub fn clear_access_token(&self) {
        if let Err(e) = self.storage.delete(StorageKeys::ACCESS_TOKEN) {
            tracing::warn!(error = %e, "Failed to clear access token");
        }
    }
}
