use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Any path no route matched
pub async fn unknown_endpoint() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
