//! Login action - exchanges email and password for a token

use serde::Deserialize;
use tokio::sync::OnceCell;
use tracing::{debug, error};

use super::AuthResponse;
use crate::common::validation::filled;
use crate::common::AppError;
use crate::domains::auth::password::{hash_password, verify_password};
use crate::kernel::ServerDeps;

const INCORRECT_CREDENTIALS: &str = "Incorrect email or password";

/// Checked against on the unknown-email path so it costs the same bcrypt
/// round as a wrong password
static DUMMY_HASH: OnceCell<String> = OnceCell::const_new();

async fn dummy_hash(cost: u32) -> anyhow::Result<&'static str> {
    let hash = DUMMY_HASH
        .get_or_try_init(|| hash_password("jobboard-unknown-account", cost))
        .await?;
    Ok(hash.as_str())
}

/// Body of `POST /api/users/login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Authenticate an existing account.
///
/// An unknown email and a wrong password produce the same error.
pub async fn login(input: LoginInput, deps: &ServerDeps) -> Result<AuthResponse, AppError> {
    let (Some(email), Some(password)) = (filled(input.email), filled(input.password)) else {
        return Err(AppError::credentials("All fields must be filled"));
    };

    let user = deps.users.find_by_email(&email).await.map_err(|e| {
        error!(error = %e, "User store failure during login");
        AppError::Internal(e.into())
    })?;

    let Some(user) = user else {
        debug!("Login attempt for unknown email");
        verify_password(&password, dummy_hash(deps.bcrypt_cost).await?).await?;
        return Err(AppError::credentials(INCORRECT_CREDENTIALS));
    };

    if !verify_password(&password, &user.password_hash).await? {
        debug!(user_id = %user.id, "Login attempt with wrong password");
        return Err(AppError::credentials(INCORRECT_CREDENTIALS));
    }

    let token = deps.jwt_service.create_token(user.id, &user.email)?;

    Ok(AuthResponse {
        email: user.email,
        token,
    })
}
