//! Session error types.

use dritter_http::ApiError;
use dritter_storage::StorageError;
use thiserror::Error;

/// Error type for session actions.
#[derive(Error, Debug)]
pub enum SessionError {
    /// An action that needs an authenticated user ran without one
    #[error("No user to update")]
    NotAuthenticated,

    /// A remote call failed; the display string is what forms show
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The token could not be persisted
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias using SessionError.
pub type SessionResult<T> = Result<T, SessionError>;
