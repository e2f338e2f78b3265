//! Composition of the remote services over their HTTP clients.

use crate::{AdminApi, AuthApi, PostsApi};
use dritter_http::{build_http_client, ApiClient, ApiResult, TokenRefresher};
use dritter_storage::TokenStore;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// All remote services, wired to their backends.
///
/// Both backends share one token store and one refresher, so a 401 on
/// either service funnels through the same single-flight refresh against
/// the users service.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthApi,
    pub posts: PostsApi,
    pub admin: AdminApi,
}

impl Services {
    /// Wire up clients for both backends.
    pub fn connect(
        users_url: &Url,
        posts_url: &Url,
        timeout: Duration,
        tokens: Arc<TokenStore>,
    ) -> ApiResult<Self> {
        // The users client keeps a cookie jar: login stores the HTTP-only
        // refresh cookie there, and the refresher replays it.
        let users_http = build_http_client(timeout, true)?;
        let refresher = Arc::new(TokenRefresher::new(
            users_http.clone(),
            users_url,
            tokens.clone(),
        )?);

        let users_client = ApiClient::new(
            users_http,
            users_url.clone(),
            tokens.clone(),
            refresher.clone(),
        );

        let posts_http = build_http_client(timeout, false)?;
        let posts_client = ApiClient::new(posts_http, posts_url.clone(), tokens, refresher);

        tracing::debug!(users = %users_url, posts = %posts_url, "Services wired");

        Ok(Self {
            auth: AuthApi::new(users_client.clone()),
            posts: PostsApi::new(posts_client),
            admin: AdminApi::new(users_client),
        })
    }
}
