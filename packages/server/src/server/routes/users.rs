use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    Json,
};

use crate::common::AppError;
use crate::domains::auth::actions::{self, LoginInput, SignupInput};
use crate::domains::auth::AuthResponse;
use crate::server::app::AppState;
use crate::server::error::AccountError;

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AccountError> {
    payload
        .map(|Json(body)| body)
        .map_err(|_| AppError::credentials("All fields must be filled").into())
}

/// POST /api/users/signup
pub async fn signup_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SignupInput>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AccountError> {
    let input = json_body(payload)?;

    let session = actions::signup(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// POST /api/users/login
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Json<AuthResponse>, AccountError> {
    let input = json_body(payload)?;

    let session = actions::login(input, &state.deps).await?;
    Ok(Json(session))
}
