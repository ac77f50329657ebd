//! HTTP mapping of `AppError`.
//!
//! Job endpoints answer `{"error": "..."}`; the account endpoints answer
//! `{"message": "..."}`, which `AccountError` produces for every variant.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::common::AppError;

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) | AppError::Credentials(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            AppError::Credentials(message) => json!({ "message": message }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Error from `/api/users/*`, always reported as `{"message": "..."}`
#[derive(Debug)]
pub struct AccountError(pub AppError);

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}
