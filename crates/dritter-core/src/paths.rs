//! File system paths for the client.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Config filename under the base directory.
const CONFIG_FILE_NAME: &str = "config.json";
/// Access token filename under the base directory.
const TOKEN_FILE_NAME: &str = "access_token";

/// Manages file system paths for the client.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for client files (~/.dritter)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.dritter`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".dritter"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.dritter).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.dritter/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Get the access token file path (~/.dritter/access_token).
    pub fn token_file(&self) -> PathBuf {
        self.base_dir.join(TOKEN_FILE_NAME)
    }

    /// Ensure the base directory exists.
    pub fn ensure_dirs(&self) -> CoreResult<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths_with_base_dir() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), &dir.path().to_path_buf());
        assert_eq!(paths.config_file(), dir.path().join("config.json"));
        assert_eq!(paths.token_file(), dir.path().join("access_token"));
    }

    #[test]
    fn test_ensure_dirs_creates_base() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("nested").join("dritter");
        let paths = Paths::with_base_dir(base.clone());

        paths.ensure_dirs().unwrap();
        assert!(base.is_dir());
    }
}
