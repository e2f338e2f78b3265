//! Posts service operations.

use crate::types::{CreatePostRequest, Post, PostsPage, SinglePost, UpdatePostRequest};
use dritter_http::{ApiClient, ApiRequest, ApiResult, Method};

/// Base path for the posts API.
const POSTS_PATH: &str = "/api/v1/posts";

/// Client for the posts timeline service.
#[derive(Clone)]
pub struct PostsApi {
    client: ApiClient,
}

impl PostsApi {
    /// Create a posts service over the posts-service client.
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List the timeline (paged).
    pub async fn list(&self) -> ApiResult<PostsPage> {
        self.client
            .execute(ApiRequest::new(Method::GET, POSTS_PATH))
            .await
    }

    /// Fetch a single post.
    pub async fn get(&self, id: i64) -> ApiResult<SinglePost> {
        self.client
            .execute(ApiRequest::new(Method::GET, format!("{POSTS_PATH}/{id}")))
            .await
    }

    /// Create a post.
    pub async fn create(&self, body: &CreatePostRequest) -> ApiResult<Post> {
        self.client
            .execute(ApiRequest::new(Method::POST, POSTS_PATH).json(body)?)
            .await
    }

    /// Update a post.
    pub async fn update(&self, id: i64, body: &UpdatePostRequest) -> ApiResult<Post> {
        self.client
            .execute(ApiRequest::new(Method::PUT, format!("{POSTS_PATH}/{id}")).json(body)?)
            .await
    }

    /// Delete a post.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.client
            .execute_unit(ApiRequest::new(Method::DELETE, format!("{POSTS_PATH}/{id}")))
            .await
    }
}
