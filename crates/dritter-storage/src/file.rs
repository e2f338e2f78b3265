//! File-backed token storage.

use crate::{StorageError, StorageResult, TokenStorage};
use std::path::{Path, PathBuf};

/// Stores each key as a plain file under a base directory.
///
/// Token files are created with owner-only permissions on unix.
pub struct FileTokenStorage {
    base_dir: PathBuf,
}

impl FileTokenStorage {
    /// Create a new file-backed storage rooted at the given directory.
    /// The directory is created on first write, not here.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        // Keys are fixed constants, but reject separators in case a caller
        // passes something path-like.
        if key.is_empty() || key.contains(std::path::MAIN_SEPARATOR) || key.contains('/') {
            return Err(StorageError::Backend(format!("Invalid storage key: {key}")));
        }
        Ok(self.base_dir.join(key))
    }

    #[cfg(unix)]
    fn restrict_permissions(path: &Path) -> StorageResult<()> {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, perms)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(_path: &Path) -> StorageResult<()> {
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        std::fs::create_dir_all(&self.base_dir)?;
        std::fs::write(&path, value)?;
        Self::restrict_permissions(&path)?;
        Ok(())
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_path(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_set_get_delete() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());

        assert_eq!(storage.get("access_token").unwrap(), None);

        storage.set("access_token", "abc.def.ghi").unwrap();
        assert_eq!(
            storage.get("access_token").unwrap(),
            Some("abc.def.ghi".to_string())
        );
        assert!(storage.has("access_token").unwrap());

        assert!(storage.delete("access_token").unwrap());
        assert!(!storage.delete("access_token").unwrap());
        assert_eq!(storage.get("access_token").unwrap(), None);
    }

    #[test]
    fn test_set_creates_base_dir() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("nested");
        let storage = FileTokenStorage::new(&base);

        storage.set("access_token", "tok").unwrap();
        assert!(base.join("access_token").is_file());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());

        assert!(storage.set("../escape", "value").is_err());
        assert!(storage.get("").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let storage = FileTokenStorage::new(dir.path());
        storage.set("access_token", "tok").unwrap();

        let meta = std::fs::metadata(dir.path().join("access_token")).unwrap();
        assert_eq!(meta.permissions().mode() & 0o777, 0o600);
    }
}
