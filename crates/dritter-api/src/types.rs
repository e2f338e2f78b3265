//! Wire types for the users and posts services.
//!
//! The users service speaks camelCase, the posts service snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Moderator,
}

/// A platform user.
///
/// Timestamps are optional because `/auth/me` omits them; a profile update
/// response carries the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Whether this user holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

// ---------------------------------------------------------------------------
// Users/auth service
// ---------------------------------------------------------------------------

/// Body for `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// User record returned by registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Envelope for `POST /register`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub data: RegisteredUser,
}

/// Body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for `POST /auth/login`. The refresh token is not here: the
/// server sets it as an HTTP-only cookie.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub email: String,
}

/// Response for `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: i64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<MeResponse> for User {
    fn from(me: MeResponse) -> Self {
        Self {
            id: me.user_id,
            name: me.name,
            email: me.email,
            role: me.role,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Response for `POST /auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Body for `PATCH /users/{id}`. `current_password` is required by the
/// server when changing the password.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Body for `POST /users` (admin).
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Single-user envelope from the users service.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub message: String,
    pub data: User,
}

/// User-list envelope from the users service (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct UsersListResponse {
    pub message: String,
    pub data: Vec<User>,
    pub count: u64,
}

/// Envelope for `DELETE /users/{id}` (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Posts service
// ---------------------------------------------------------------------------

/// Author summary embedded in a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAuthor {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// A timeline post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<PostAuthor>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Paged response for `GET /api/v1/posts`.
#[derive(Debug, Clone, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Response for `GET /api/v1/posts/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SinglePost {
    pub post: Post,
}

/// Body for `POST /api/v1/posts`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Body for `PUT /api/v1/posts/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), json!("admin"));
        assert_eq!(
            serde_json::from_value::<Role>(json!("moderator")).unwrap(),
            Role::Moderator
        );
    }

    #[test]
    fn test_user_parses_camel_case() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Test User",
            "email": "test@example.com",
            "role": "user",
            "createdAt": "2023-01-01T00:00:00.000Z",
            "updatedAt": "2023-01-01T00:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.role, Role::User);
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_me_response_converts_without_timestamps() {
        let me: MeResponse = serde_json::from_value(json!({
            "userId": 7,
            "name": "Test User",
            "email": "test@example.com",
            "role": "admin"
        }))
        .unwrap();

        let user = User::from(me);
        assert_eq!(user.id, 7);
        assert_eq!(user.role, Role::Admin);
        assert_eq!(user.created_at, None);
    }

    #[test]
    fn test_update_profile_skips_absent_fields() {
        let body = UpdateProfileRequest {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "New Name"})
        );
    }

    #[test]
    fn test_post_parses_snake_case_with_optional_author() {
        let post: Post = serde_json::from_value(json!({
            "id": 3,
            "title": "Hello",
            "content": "First post",
            "author_id": 1,
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }))
        .unwrap();

        assert_eq!(post.author, None);
        assert_eq!(post.author_id, 1);
    }
}
