//! Application setup and server configuration.

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::kernel::ServerDeps;
use crate::server::middleware::jwt_auth_middleware;
use crate::server::routes::{
    create_job_handler, delete_job_handler, get_job_handler, health_handler, list_jobs_handler,
    login_handler, signup_handler, unknown_endpoint, update_job_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    /// Let anonymous callers list and fetch jobs
    pub public_job_reads: bool,
}

/// HTTP-level settings that do not belong to the domain dependencies
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub allowed_origins: Vec<String>,
    pub public_job_reads: bool,
}

/// Turn a panicking handler into the generic 500 body
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "Handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
        .into_response()
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, options: AppOptions) -> Router {
    let deps = Arc::new(deps);
    let jwt_service = deps.jwt_service.clone();

    let app_state = AppState {
        deps,
        public_job_reads: options.public_job_reads,
    };

    Router::new()
        // Jobs
        .route("/api/jobs", get(list_jobs_handler).fallback(unknown_endpoint))
        .route("/api/jobs/", get(list_jobs_handler).fallback(unknown_endpoint))
        .route(
            "/api/jobs/create",
            post(create_job_handler).fallback(unknown_endpoint),
        )
        .route(
            "/api/jobs/:id",
            get(get_job_handler)
                .put(update_job_handler)
                .delete(delete_job_handler)
                .fallback(unknown_endpoint),
        )
        // Accounts
        .route(
            "/api/users/signup",
            post(signup_handler).fallback(unknown_endpoint),
        )
        .route(
            "/api/users/login",
            post(login_handler).fallback(unknown_endpoint),
        )
        // Health check
        .route("/health", get(health_handler).fallback(unknown_endpoint))
        // Unknown paths, and known paths with an unsupported method
        .fallback(unknown_endpoint)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service.clone(), req, next)
        })) // JWT authentication
        .layer(Extension(app_state))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(&options.allowed_origins))
        .layer(TraceLayer::new_for_http())
}
