//! Typed remote services for the Dritter backends.
//!
//! Thin request/response mappings, one HTTP call per operation. Retries and
//! caching are not this layer's concern: the HTTP layer owns the bounded
//! 401 refresh, and the session layer owns state.

mod admin;
mod auth;
mod posts;
mod services;
mod types;

pub use admin::AdminApi;
pub use auth::AuthApi;
pub use posts::PostsApi;
pub use services::Services;
pub use types::{
    CreatePostRequest, CreateUserRequest, DeleteResponse, LoginRequest, LoginResponse, MeResponse,
    Post, PostAuthor, PostsPage, RefreshResponse, RegisterRequest, RegisterResponse,
    RegisteredUser, Role, SinglePost, UpdatePostRequest, UpdateProfileRequest, User, UserResponse,
    UsersListResponse,
};

pub use dritter_http::{ApiError, ApiResult};
