//! Shared test helpers for integration tests.
//!
//! The application runs on the in-memory stores, so no database or object
//! store is needed.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use listhub_api::{AppState, build_router};
use listhub_core::config::AppConfig;
use listhub_database::{MemoryListingStore, MemoryUserStore};
use listhub_storage::providers::MemoryBlobStore;

const TEST_CONFIG: &str = r#"
[database]
url = "postgres://unused/listhub_test"

[auth]
jwt_secret = "integration-test-secret"

[storage]
provider = "memory"
public_url = "/api/images"

[listing]
default_page_size = 50
max_page_size = 100
"#;

const BOUNDARY: &str = "listhub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Blob store behind the image endpoints
    pub blobs: Arc<MemoryBlobStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::from_toml(TEST_CONFIG).expect("Failed to parse test config");
        let blobs = Arc::new(MemoryBlobStore::new());

        let state = AppState::new(
            config,
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryListingStore::new()),
            blobs.clone(),
        );

        Self {
            router: build_router(state),
            blobs,
        }
    }

    /// Register a user through the API and return the response
    pub async fn register(&self, email: &str, username: &str, password: &str) -> TestResponse {
        let body = serde_json::json!({
            "email": email,
            "username": username,
            "password": password,
        });
        self.request("POST", "/api/auth/register", Some(body), None)
            .await
    }

    /// Submit the login form
    pub async fn login_raw(&self, username: &str, password: &str) -> TestResponse {
        let form = format!("username={username}&password={password}");
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .expect("Failed to build request");
        self.send(req).await
    }

    /// Login and return JWT access token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.login_raw(username, password).await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("access_token")
            .and_then(|v| v.as_str())
            .expect("No access_token in login response")
            .to_string()
    }

    /// Register `username` with a fixed password and return a token for it
    pub async fn user_with_token(&self, username: &str) -> String {
        let response = self
            .register(&format!("{username}@example.com"), username, "gingerbread")
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Register failed: {:?}",
            response.body
        );
        self.login(username, "gingerbread").await
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            req = req.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload `data` as the multipart field `file`
    pub async fn upload(&self, filename: &str, content_type: &str, data: &[u8]) -> TestResponse {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
                .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// GET a path and return the raw response bytes
    pub async fn get_raw(&self, path: &str) -> RawResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        RawResponse {
            status,
            headers,
            body,
        }
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

/// Undecoded response
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}
