//! In-process test application
//!
//! Builds the real router over an in-memory database and an in-memory image
//! store, and sends requests to it with `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use social_net::backend::media::{CloudinaryClient, CloudinaryConfig, ImageStore, MemoryImageStore};
use social_net::backend::routes::create_router;
use social_net::backend::server::{AppState, ServerConfig};

use super::auth_helpers::{auth_header, create_test_user, TestUser, TEST_BCRYPT_COST, TEST_JWT_SECRET};
use super::database::create_test_pool;

pub const TEST_IMAGE_BASE: &str = "https://images.test/upload";

/// Test application fixture
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub images: MemoryImageStore,
}

impl TestApp {
    /// App with the in-memory image store
    pub async fn new() -> Self {
        let images = MemoryImageStore::new(TEST_IMAGE_BASE);
        Self::with_image_store(ImageStore::Memory(images.clone()), images).await
    }

    /// App whose image uploads are refused
    pub async fn without_images() -> Self {
        Self::with_image_store(ImageStore::Disabled, MemoryImageStore::new(TEST_IMAGE_BASE)).await
    }

    /// App that talks to a Cloudinary API at `api_base`, cloud `demo`
    ///
    /// `images` stays empty; assert against the mock server instead.
    pub async fn with_cloudinary(api_base: &str) -> Self {
        let client = CloudinaryClient::new(CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            upload_preset: "posts".to_string(),
            api_base: api_base.to_string(),
        });
        Self::with_image_store(ImageStore::Cloudinary(client), MemoryImageStore::new(TEST_IMAGE_BASE))
            .await
    }

    async fn with_image_store(store: ImageStore, images: MemoryImageStore) -> Self {
        let pool = create_test_pool().await;
        let config = ServerConfig::builder()
            .jwt_secret(TEST_JWT_SECRET)
            .bcrypt_cost(TEST_BCRYPT_COST)
            .static_dir("tests/no-static-files")
            .build()
            .expect("Failed to build test config");

        let router = create_router(AppState::new(pool.clone(), store, config));

        Self {
            router,
            pool,
            images,
        }
    }

    /// Insert a user directly and return its credentials
    pub async fn user(&self, username: &str) -> TestUser {
        create_test_user(&self.pool, username).await
    }

    /// Send a request and decode the JSON response
    ///
    /// An empty body decodes as `Value::Null`.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, auth_header(token));
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router failed");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Create a text post as `user` and return its id
    pub async fn create_post(&self, user: &TestUser, text: &str) -> String {
        let (status, body) = self
            .post(
                "/api/posts",
                Some(&user.token),
                serde_json::json!({ "text": text }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create post failed: {}", body);
        body["id"].as_str().expect("post id").to_string()
    }
}
