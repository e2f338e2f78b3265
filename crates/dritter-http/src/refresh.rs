//! Single-flight access-token refresh.

use crate::{ApiError, ApiResult};
use dritter_storage::TokenStore;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

/// Refresh endpoint path on the users service.
const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Deserialize)]
struct RefreshResponse {
    #[serde(rename = "accessToken")]
    access_token: String,
}

/// Refreshes the access token via the users service.
///
/// The refresh token is an HTTP-only cookie held by the reqwest cookie jar,
/// so the request carries no body. Refreshes are serialized behind a mutex;
/// a caller whose stale token was already replaced while waiting gets the
/// fresh token back without issuing a duplicate refresh call.
pub struct TokenRefresher {
    http: reqwest::Client,
    refresh_url: Url,
    tokens: Arc<TokenStore>,
    gate: Mutex<()>,
}

impl TokenRefresher {
    /// Create a refresher against the given users-service base URL.
    ///
    /// `http` must be the same client (same cookie jar) used for login,
    /// otherwise the refresh cookie is never present.
    pub fn new(http: reqwest::Client, users_base_url: &Url, tokens: Arc<TokenStore>) -> ApiResult<Self> {
        let refresh_url = crate::client::join_path(users_base_url, REFRESH_PATH)?;
        Ok(Self {
            http,
            refresh_url,
            tokens,
            gate: Mutex::new(()),
        })
    }

    /// Obtain a fresh access token, persisting it on success.
    ///
    /// `stale` is the token the caller saw when its request was rejected;
    /// it is used to detect that another caller already refreshed. On
    /// failure the stored token is cleared and the mapped error returned.
    pub async fn refresh(&self, stale: Option<&str>) -> ApiResult<String> {
        let _guard = self.gate.lock().await;

        // Someone refreshed while we waited for the gate
        if let (Some(stale), Some(current)) = (stale, self.tokens.access_token()) {
            if stale != current {
                tracing::debug!("Reusing token refreshed by a concurrent request");
                return Ok(current);
            }
        }

        tracing::debug!(url = %self.refresh_url, "Refreshing access token");

        let response = self
            .http
            .post(self.refresh_url.clone())
            .send()
            .await
            .map_err(ApiError::Connectivity)?;

        if !response.status().is_success() {
            let error = ApiError::from_response(response).await;
            tracing::warn!(error = %error, "Token refresh rejected, clearing access token");
            self.tokens.clear_access_token();
            return Err(error);
        }

        let data: RefreshResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        self.tokens.set_access_token(&data.access_token)?;
        tracing::debug!("Access token refreshed");

        Ok(data.access_token)
    }
}
