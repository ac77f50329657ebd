//! Signup action - creates an account and issues its first token

use serde::Deserialize;
use tracing::{error, info};

use super::AuthResponse;
use crate::common::validation::{filled, is_valid_email};
use crate::common::AppError;
use crate::domains::auth::models::CreateUser;
use crate::domains::auth::password::{hash_password, validate_password};
use crate::kernel::{ServerDeps, StoreError};

/// Body of `POST /api/users/signup`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(alias = "phoneNumber")]
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    #[serde(alias = "dateOfBirth")]
    pub date_of_birth: Option<String>,
    #[serde(alias = "membershipStatus")]
    pub membership_status: Option<String>,
}

/// Register a new account.
///
/// Checks run in order: every field filled, email syntax, password length,
/// email not taken. The password is hashed on the blocking pool before insert.
pub async fn signup(input: SignupInput, deps: &ServerDeps) -> Result<AuthResponse, AppError> {
    let (
        Some(name),
        Some(email),
        Some(password),
        Some(phone_number),
        Some(gender),
        Some(date_of_birth),
        Some(membership_status),
    ) = (
        filled(input.name),
        filled(input.email),
        filled(input.password),
        filled(input.phone_number),
        filled(input.gender),
        filled(input.date_of_birth),
        filled(input.membership_status),
    )
    else {
        return Err(AppError::credentials("All fields must be filled"));
    };

    if !is_valid_email(&email) {
        return Err(AppError::credentials("Invalid email address"));
    }

    validate_password(&password).map_err(AppError::Credentials)?;

    if deps
        .users
        .find_by_email(&email)
        .await
        .map_err(internal)?
        .is_some()
    {
        return Err(AppError::credentials("Email already in use"));
    }

    let password_hash = hash_password(&password, deps.bcrypt_cost).await?;

    let user = deps
        .users
        .insert(CreateUser {
            name,
            email,
            password_hash,
            phone_number,
            gender,
            date_of_birth,
            membership_status,
        })
        .await
        .map_err(|e| match e {
            StoreError::UniqueViolation(_) => AppError::credentials("Email already in use"),
            other => internal(other),
        })?;

    let token = deps.jwt_service.create_token(user.id, &user.email)?;
    info!(user_id = %user.id, "User signed up");

    Ok(AuthResponse {
        email: user.email,
        token,
    })
}

fn internal(err: StoreError) -> AppError {
    error!(error = %err, "User store failure during signup");
    AppError::Internal(err.into())
}
