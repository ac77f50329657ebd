use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint
///
/// Round-trips the job store with a 5s timeout. Returns 200 OK when it
/// answers, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let error = match tokio::time::timeout(
        std::time::Duration::from_secs(5),
        state.deps.jobs.ping(),
    )
    .await
    {
        Ok(Ok(())) => None,
        Ok(Err(e)) => Some(format!("Query failed: {}", e)),
        Err(_) => Some("Query timeout (>5s)".to_string()),
    };

    let (status_code, status) = match error {
        None => (StatusCode::OK, "healthy"),
        Some(_) => (StatusCode::SERVICE_UNAVAILABLE, "unhealthy"),
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            error,
        }),
    )
}
