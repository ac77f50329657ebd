//! In-process HTTP driver for the axum router.
//!
//! Requests go straight into the `Router` with `tower::ServiceExt::oneshot`,
//! backed by the in-memory stores from `TestDependencies`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use jobboard_core::kernel::TestDependencies;
use jobboard_core::server::{build_app, AppOptions};
use serde_json::Value;
use tower::ServiceExt;

use super::signup_payload;

pub const TEST_ORIGIN: &str = "https://jobs.example.test";

/// Router plus handles on its stores
pub struct TestApp {
    pub router: Router,
    pub deps: TestDependencies,
}

/// Status and parsed JSON body (`Value::Null` for an empty body)
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_options(AppOptions {
            allowed_origins: vec![TEST_ORIGIN.to_string()],
            public_job_reads: false,
        })
    }

    pub fn with_options(options: AppOptions) -> Self {
        let deps = TestDependencies::new();
        let router = build_app(deps.server_deps(), options);
        Self { router, deps }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(body) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(body.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).expect("valid request")).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }

    /// Sign up a fresh account and return its token
    pub async fn token(&self) -> String {
        let response = self
            .post(
                "/api/users/signup",
                None,
                signup_payload("tester@example.com", "SecurePass123"),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["token"]
            .as_str()
            .expect("token in signup response")
            .to_string()
    }
}
