use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::common::UserId;

/// Account created through signup
#[derive(sqlx::FromRow, Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: String,
    pub membership_status: String,
    pub created_at: DateTime<Utc>,
}

/// Validated signup data with the password already hashed
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: String,
    pub gender: String,
    pub date_of_birth: String,
    pub membership_status: String,
}

impl User {
    pub fn from_create(id: UserId, input: CreateUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            phone_number: input.phone_number,
            gender: input.gender,
            date_of_birth: input.date_of_birth,
            membership_status: input.membership_status,
            created_at: now,
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl User {
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert a user. A taken email fails with a unique violation from
    /// `idx_users_email`.
    pub async fn create(input: &CreateUser, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO users (
                id, name, email, password_hash, phone_number,
                gender, date_of_birth, membership_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(UserId::new())
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password_hash)
        .bind(&input.phone_number)
        .bind(&input.gender)
        .bind(&input.date_of_birth)
        .bind(&input.membership_status)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }
}
