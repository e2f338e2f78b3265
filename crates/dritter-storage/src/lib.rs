//! Token storage abstraction for the Dritter client.
//!
//! This crate provides:
//! - A `TokenStorage` trait for pluggable persistence backends
//! - A file-backed implementation (the client's only durable state is a
//!   single bearer token)
//! - A `TokenStore` facade with fail-open reads: if the backend is
//!   unavailable, the client degrades to "no token" (unauthenticated)

mod file;
mod keys;
mod token_store;
mod traits;

pub use file::FileTokenStorage;
pub use keys::StorageKeys;
pub use token_store::TokenStore;
pub use traits::TokenStorage;

use thiserror::Error;

/// Error type for storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific storage error
    #[error("Storage error: {0}")]
    Backend(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory storage for testing
    pub struct MemoryStorage {
        data: std::sync::Mutex<std::collections::HashMap<String, String>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self {
                data: std::sync::Mutex::new(std::collections::HashMap::new()),
            }
        }
    }

    impl TokenStorage for MemoryStorage {
        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            let mut data = self.data.lock().unwrap();
            data.insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            let data = self.data.lock().unwrap();
            Ok(data.get(key).cloned())
        }

        fn delete(&self, key: &str) -> StorageResult<bool> {
            let mut data = self.data.lock().unwrap();
            Ok(data.remove(key).is_some())
        }
    }

    /// Storage that fails every operation, for fail-open tests
    struct BrokenStorage;

    impl TokenStorage for BrokenStorage {
        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Backend("unavailable".to_string()))
        }

        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Backend("unavailable".to_string()))
        }

        fn delete(&self, _key: &str) -> StorageResult<bool> {
            Err(StorageError::Backend("unavailable".to_string()))
        }
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();

        storage.set("test_key", "test_value").unwrap();
        assert_eq!(
            storage.get("test_key").unwrap(),
            Some("test_value".to_string())
        );

        assert!(storage.has("test_key").unwrap());
        assert!(!storage.has("nonexistent").unwrap());

        assert!(storage.delete("test_key").unwrap());
        assert!(!storage.delete("test_key").unwrap());
        assert_eq!(storage.get("test_key").unwrap(), None);
    }

    #[test]
    fn test_token_store() {
        let store = TokenStore::new(Box::new(MemoryStorage::new()));

        assert_eq!(store.access_token(), None);
        assert!(!store.has_access_token());

        store.set_access_token("token-123").unwrap();
        assert_eq!(store.access_token(), Some("token-123".to_string()));
        assert!(store.has_access_token());

        // Setting again replaces the previous value (at most one token live)
        store.set_access_token("token-456").unwrap();
        assert_eq!(store.access_token(), Some("token-456".to_string()));

        store.clear_access_token();
        assert_eq!(store.access_token(), None);
        assert!(!store.has_access_token());
    }

    #[test]
    fn test_token_store_fails_open_when_backend_unavailable() {
        let store = TokenStore::new(Box::new(BrokenStorage));

        // Reads degrade to "no token" rather than erroring
        assert_eq!(store.access_token(), None);
        assert!(!store.has_access_token());

        // Writes surface the error to the caller
        assert!(store.set_access_token("token").is_err());

        // Clear is best-effort
        store.clear_access_token();
    }

    #[test]
    fn test_storage_keys() {
        assert!(!StorageKeys::ACCESS_TOKEN.is_empty());
    }
}
