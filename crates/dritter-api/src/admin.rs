//! Admin-only user management operations.

use crate::types::{
    CreateUserRequest, DeleteResponse, UpdateProfileRequest, UserResponse, UsersListResponse,
};
use dritter_http::{ApiClient, ApiRequest, ApiResult, Method};

/// Client for the admin-only `/users` endpoints. The server enforces the
/// role; a non-admin caller gets a 403 back.
#[derive(Clone)]
pub struct AdminApi {
    client: ApiClient,
}

impl AdminApi {
    /// Create an admin service over the users-service client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List all users.
    pub async fn list_users(&self) -> ApiResult<UsersListResponse> {
        self.client
            .execute(ApiRequest::new(Method::GET, "/users"))
            .await
    }

    /// Fetch a user by id.
    pub async fn get_user(&self, user_id: i64) -> ApiResult<UserResponse> {
        self.client
            .execute(ApiRequest::new(Method::GET, format!("/users/{user_id}")))
            .await
    }

    /// Create a user with an explicit role.
    pub async fn create_user(&self, body: &CreateUserRequest) -> ApiResult<UserResponse> {
        self.client
            .execute(ApiRequest::new(Method::POST, "/users").json(body)?)
            .await
    }

    /// Update any user.
    pub async fn update_user(
        &self,
        user_id: i64,
        body: &UpdateProfileRequest,
    ) -> ApiResult<UserResponse> {
        self.client
            .execute(ApiRequest::new(Method::PATCH, format!("/users/{user_id}")).json(body)?)
            .await
    }

    /// Delete a user.
    pub async fn delete_user(&self, user_id: i64) -> ApiResult<DeleteResponse> {
        self.client
            .execute(ApiRequest::new(Method::DELETE, format!("/users/{user_id}")))
            .await
    }
}
