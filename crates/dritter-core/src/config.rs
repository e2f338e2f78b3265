//! Configuration management for the client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

/// Default users/auth service URL.
pub const DEFAULT_USERS_API_URL: &str = "http://localhost:3000";

/// Default posts service URL.
pub const DEFAULT_POSTS_API_URL: &str = "http://localhost:8080";

/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Users/auth service base URL.
    #[serde(default = "default_users_api_url")]
    pub users_api_url: String,
    /// Posts service base URL.
    #[serde(default = "default_posts_api_url")]
    pub posts_api_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_users_api_url() -> String {
    DEFAULT_USERS_API_URL.to_string()
}

fn default_posts_api_url() -> String {
    DEFAULT_POSTS_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            users_api_url: DEFAULT_USERS_API_URL.to_string(),
            posts_api_url: DEFAULT_POSTS_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create a new Config with default values, then override from environment.
    pub fn new() -> Self {
        let mut config = Self::default();
        config.load_from_env();
        config
    }

    /// Load configuration from the config file, falling back to defaults.
    /// Environment variables override file values.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the config file.
    pub fn save(&self, paths: &Paths) -> CoreResult<()> {
        paths.ensure_dirs()?;
        let config_path = paths.config_file();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Override configuration from environment variables.
    fn load_from_env(&mut self) {
        if let Ok(log_level) = std::env::var("DRITTER_LOG_LEVEL") {
            self.log_level = log_level;
        }
        if let Ok(url) = std::env::var("DRITTER_USERS_API_URL") {
            self.users_api_url = url;
        }
        if let Ok(url) = std::env::var("DRITTER_POSTS_API_URL") {
            self.posts_api_url = url;
        }
    }

    /// Get the users service URL as a parsed URL.
    pub fn users_api_url(&self) -> CoreResult<Url> {
        Url::parse(&self.users_api_url).map_err(CoreError::from)
    }

    /// Get the posts service URL as a parsed URL.
    pub fn posts_api_url(&self) -> CoreResult<Url> {
        Url::parse(&self.posts_api_url).map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.users_api_url, DEFAULT_USERS_API_URL);
        assert_eq!(config.posts_api_url, DEFAULT_POSTS_API_URL);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        let config_json = r#"{
            "log_level": "debug",
            "users_api_url": "http://users.internal:3000"
        }"#;

        std::fs::write(&config_path, config_json).unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.users_api_url, "http://users.internal:3000");
        // Missing fields fall back to defaults
        assert_eq!(config.posts_api_url, DEFAULT_POSTS_API_URL);
    }

    #[test]
    fn test_config_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let mut config = Config::default();
        config.log_level = "trace".to_string();
        config.posts_api_url = "http://posts.internal:8080".to_string();

        config.save(&paths).unwrap();

        let loaded = Config::load(&paths).unwrap();
        assert_eq!(loaded.log_level, "trace");
        assert_eq!(loaded.posts_api_url, "http://posts.internal:8080");
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.users_api_url, DEFAULT_USERS_API_URL);
    }

    #[test]
    fn test_config_url_parse() {
        let config = Config::default();
        let url = config.users_api_url().unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(3000));
    }

    #[test]
    fn test_config_invalid_url() {
        let mut config = Config::default();
        config.users_api_url = "not a valid url".to_string();

        let result = config.users_api_url();
        assert!(result.is_err());
    }
}
