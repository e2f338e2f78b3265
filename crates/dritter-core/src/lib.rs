//! Core types, configuration, and utilities for the Dritter client.

mod config;
mod error;
mod logging;
mod paths;

pub use config::{Config, DEFAULT_POSTS_API_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USERS_API_URL};
pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use paths::Paths;
