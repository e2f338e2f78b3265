//! HTTP client layer for the Dritter client.
//!
//! This crate provides:
//! - `ApiClient`: one configured client per backend service, running every
//!   request through an explicit pipeline (bearer attachment, dispatch,
//!   error mapping, bounded refresh-and-retry on 401)
//! - `TokenRefresher`: single-flight access-token refresh against the users
//!   service's cookie-based refresh endpoint
//! - `ApiError`: the typed failure taxonomy shared by all remote calls

mod client;
mod error;
mod refresh;

pub use client::{build_http_client, ApiClient, ApiRequest};
pub use error::{ApiError, ApiResult, ErrorEnvelope};
pub use refresh::TokenRefresher;

pub use reqwest::Method;
