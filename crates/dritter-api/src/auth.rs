//! Users/auth service operations.

use crate::types::{
    LoginRequest, LoginResponse, MeResponse, RefreshResponse, RegisterRequest, RegisterResponse,
    UpdateProfileRequest, UserResponse,
};
use dritter_http::{ApiClient, ApiRequest, ApiResult, Method};

/// Client for the public and user-scoped auth endpoints.
#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    /// Create an auth service over the users-service client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register a new account. Does not authenticate by itself.
    pub async fn register(&self, body: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.client
            .execute(ApiRequest::new(Method::POST, "/register").json(body)?)
            .await
    }

    /// Exchange credentials for an access token. The server also sets the
    /// HTTP-only refresh cookie on this response.
    pub async fn login(&self, body: &LoginRequest) -> ApiResult<LoginResponse> {
        self.client
            .execute(ApiRequest::new(Method::POST, "/auth/login").json(body)?)
            .await
    }

    /// Fetch the authenticated user's identity.
    pub async fn current_user(&self) -> ApiResult<MeResponse> {
        self.client
            .execute(ApiRequest::new(Method::GET, "/auth/me"))
            .await
    }

    /// Exchange the refresh cookie for a new access token.
    pub async fn refresh_token(&self) -> ApiResult<RefreshResponse> {
        self.client
            .execute(ApiRequest::new(Method::POST, "/auth/refresh"))
            .await
    }

    /// Update the authenticated user's own profile.
    pub async fn update_profile(
        &self,
        user_id: i64,
        body: &UpdateProfileRequest,
    ) -> ApiResult<UserResponse> {
        self.client
            .execute(ApiRequest::new(Method::PATCH, format!("/users/{user_id}")).json(body)?)
            .await
    }
}
