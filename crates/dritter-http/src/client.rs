//! Per-backend API client with an explicit request pipeline.

use crate::{ApiError, ApiResult, TokenRefresher};
use dritter_storage::TokenStore;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Build the underlying reqwest client.
///
/// The users-service client needs the cookie jar (the refresh token arrives
/// as an HTTP-only cookie on login); the posts-service client does not.
pub fn build_http_client(timeout: Duration, cookie_jar: bool) -> ApiResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder().timeout(timeout);
    if cookie_jar {
        builder = builder.cookie_store(true);
    }
    builder.build().map_err(ApiError::ClientBuild)
}

/// Join a service-relative path onto a base URL, preserving any path prefix
/// on the base: `http://host/api` + `/auth/login` →
/// `http://host/api/auth/login`.
pub(crate) fn join_path(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        base.set_path(&format!("{}/", base.path()));
    }
    base.join(path.trim_start_matches('/'))
}

/// A single outbound request before the pipeline runs.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Create a request for the given method and service-relative path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attach a JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> ApiResult<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Configured client for one backend service.
///
/// The pipeline per request: resolve URL, attach bearer token when present,
/// dispatch, then either deserialize a success or map the failure through
/// the error taxonomy. A 401 is given exactly one transparent
/// refresh-and-retry; a second rejection surfaces as-is.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    tokens: Arc<TokenStore>,
    refresher: Arc<TokenRefresher>,
}

impl ApiClient {
    /// Create a client for a backend.
    ///
    /// `refresher` is shared across backends so concurrent 401s coalesce
    /// into one refresh.
    pub fn new(
        http: reqwest::Client,
        base_url: Url,
        tokens: Arc<TokenStore>,
        refresher: Arc<TokenRefresher>,
    ) -> Self {
        Self {
            http,
            base_url,
            tokens,
            refresher,
        }
    }

    /// Execute a request and deserialize the JSON response.
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let response = self.dispatch_with_retry(&request).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Execute a request, discarding any response body.
    pub async fn execute_unit(&self, request: ApiRequest) -> ApiResult<()> {
        self.dispatch_with_retry(&request).await?;
        Ok(())
    }

    async fn dispatch_with_retry(&self, request: &ApiRequest) -> ApiResult<reqwest::Response> {
        let token = self.tokens.access_token();
        let response = self.dispatch(request, token.as_deref()).await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status.as_u16() != 401 {
            return Err(ApiError::from_response(response).await);
        }

        // One transparent refresh-and-retry; the retried marker is this
        // code path itself, so a second 401 cannot loop.
        match self.refresher.refresh(token.as_deref()).await {
            Ok(fresh) => {
                tracing::debug!(path = %request.path, "Retrying request with refreshed token");
                let retried = self.dispatch(request, Some(&fresh)).await?;
                if retried.status().is_success() {
                    Ok(retried)
                } else {
                    Err(ApiError::from_response(retried).await)
                }
            }
            Err(refresh_error) => {
                // Token already cleared by the refresher; the caller gets
                // the original rejection, not the refresh failure.
                tracing::debug!(error = %refresh_error, "Refresh failed, surfacing original 401");
                Err(ApiError::from_response(response).await)
            }
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> ApiResult<reqwest::Response> {
        let url = join_path(&self.base_url, &request.path)?;
        let mut builder = self.http.request(request.method.clone(), url);

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder.send().await.map_err(ApiError::Connectivity)
    }
}
