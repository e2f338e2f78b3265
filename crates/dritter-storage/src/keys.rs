//! Storage key constants.

/// Storage keys used by the client
pub struct StorageKeys;

impl StorageKeys {
    /// Bearer access token. The refresh token never touches this store; it
    /// lives in an HTTP-only cookie owned by the users service.
    pub const ACCESS_TOKEN: &'static str = "access_token";
}
