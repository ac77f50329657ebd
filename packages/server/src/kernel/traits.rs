// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Validation and error mapping live in the domain actions that use them.
//
// Naming convention: Base* for trait names (e.g., BaseJobStore)

use async_trait::async_trait;
use thiserror::Error;

use crate::common::JobId;
use crate::domains::auth::models::{CreateUser, User};
use crate::domains::jobs::data::JobPatch;
use crate::domains::jobs::models::{CreateJob, Job};

// =============================================================================
// Store errors
// =============================================================================

/// Failure reported by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write (carries the constraint name)
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Classify an error coming out of a model query.
    ///
    /// Postgres unique violations become `UniqueViolation`; everything else is
    /// an opaque backend failure.
    pub fn from_query(err: anyhow::Error) -> Self {
        if let Some(sqlx::Error::Database(db_err)) = err.downcast_ref::<sqlx::Error>() {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique").to_string();
                return Self::UniqueViolation(constraint);
            }
        }
        Self::Backend(err)
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

// =============================================================================
// Job Store Trait (Infrastructure - job persistence)
// =============================================================================

#[async_trait]
pub trait BaseJobStore: Send + Sync {
    /// All jobs in creation order, or the `limit` newest ones newest-first
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Job>>;

    async fn find_by_id(&self, id: JobId) -> StoreResult<Option<Job>>;

    async fn contact_email_in_use(&self, email: &str) -> StoreResult<bool>;

    /// Insert a job. Must reject a duplicate contact email with
    /// `StoreError::UniqueViolation` atomically with the write.
    async fn insert(&self, input: CreateJob) -> StoreResult<Job>;

    /// Apply a partial update. `Ok(None)` when the id is unknown.
    async fn update(&self, id: JobId, patch: &JobPatch) -> StoreResult<Option<Job>>;

    /// Delete a job and return how many records were removed
    async fn delete(&self, id: JobId) -> StoreResult<u64>;

    /// Cheap round-trip used by the health check
    async fn ping(&self) -> StoreResult<()>;
}

// =============================================================================
// User Store Trait (Infrastructure - account persistence)
// =============================================================================

#[async_trait]
pub trait BaseUserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// Insert a user. Must reject a duplicate email with
    /// `StoreError::UniqueViolation`.
    async fn insert(&self, input: CreateUser) -> StoreResult<User>;
}
