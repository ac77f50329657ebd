//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container handed to every
//! action. Persistence goes through trait objects so tests can swap in the
//! in-memory stores from `test_dependencies`.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::common::JobId;
use crate::domains::auth::models::{CreateUser, User};
use crate::domains::auth::JwtService;
use crate::domains::jobs::data::JobPatch;
use crate::domains::jobs::models::{CreateJob, Job};
use crate::kernel::{BaseJobStore, BaseUserStore, StoreError, StoreResult};

// =============================================================================
// Postgres adapters (implement the store traits over the model queries)
// =============================================================================

/// Job store backed by the `jobs` table
pub struct PostgresJobStore {
    pool: PgPool,
}

impl PostgresJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseJobStore for PostgresJobStore {
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Job>> {
        match limit {
            Some(limit) => Job::find_newest(limit, &self.pool).await,
            None => Job::find_all(&self.pool).await,
        }
        .map_err(StoreError::from_query)
    }

    async fn find_by_id(&self, id: JobId) -> StoreResult<Option<Job>> {
        Job::find_by_id(id, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn contact_email_in_use(&self, email: &str) -> StoreResult<bool> {
        Job::contact_email_exists(email, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn insert(&self, input: CreateJob) -> StoreResult<Job> {
        Job::create(&input, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn update(&self, id: JobId, patch: &JobPatch) -> StoreResult<Option<Job>> {
        Job::update(id, patch, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn delete(&self, id: JobId) -> StoreResult<u64> {
        Job::delete(id, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Backend(e.into()))
    }
}

/// User store backed by the `users` table
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseUserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        User::find_by_email(email, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }

    async fn insert(&self, input: CreateUser) -> StoreResult<User> {
        User::create(&input, &self.pool)
            .await
            .map_err(StoreError::from_query)
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to actions (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    pub jobs: Arc<dyn BaseJobStore>,
    pub users: Arc<dyn BaseUserStore>,
    /// JWT service for token creation and verification
    pub jwt_service: Arc<JwtService>,
    /// bcrypt work factor for new password hashes
    pub bcrypt_cost: u32,
}

impl ServerDeps {
    pub fn new(
        jobs: Arc<dyn BaseJobStore>,
        users: Arc<dyn BaseUserStore>,
        jwt_service: Arc<JwtService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            jobs,
            users,
            jwt_service,
            bcrypt_cost,
        }
    }

    /// Production wiring: both stores share one Postgres pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>, bcrypt_cost: u32) -> Self {
        Self::new(
            Arc::new(PostgresJobStore::new(pool.clone())),
            Arc::new(PostgresUserStore::new(pool)),
            jwt_service,
            bcrypt_cost,
        )
    }
}
