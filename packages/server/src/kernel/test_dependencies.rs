// TestDependencies - in-memory implementations for testing
//
// Provides store implementations that can be injected into ServerDeps so the
// full HTTP stack runs without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use super::{BaseJobStore, BaseUserStore, ServerDeps, StoreError, StoreResult};
use crate::common::{JobId, UserId};
use crate::domains::auth::models::{CreateUser, User};
use crate::domains::auth::JwtService;
use crate::domains::jobs::data::JobPatch;
use crate::domains::jobs::models::{CreateJob, Job};

/// Lowest cost bcrypt accepts; keeps signup fast in tests
pub const TEST_BCRYPT_COST: u32 = 4;

// =============================================================================
// In-memory Job Store
// =============================================================================

/// Job store holding records in insertion order.
///
/// Uniqueness of the contact email is checked under the same lock as the
/// write, mirroring the unique index of the Postgres store.
#[derive(Default)]
pub struct InMemoryJobStore {
    jobs: Mutex<Vec<Job>>,
    unavailable: AtomicBool,
    stale_email_check: AtomicBool,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail as if the store were unreachable
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Make `contact_email_in_use` always answer `false`, as it would for a
    /// concurrent create whose insert has not landed yet. Inserts still
    /// enforce uniqueness.
    pub fn set_stale_email_check(&self, stale: bool) {
        self.stale_email_check.store(stale, Ordering::SeqCst);
    }

    /// Number of stored jobs
    pub fn len(&self) -> usize {
        self.jobs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Backend(anyhow::anyhow!("job store unavailable")));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseJobStore for InMemoryJobStore {
    async fn list(&self, limit: Option<i64>) -> StoreResult<Vec<Job>> {
        self.check_available()?;
        let jobs = self.jobs.lock().unwrap();
        Ok(match limit {
            Some(limit) => jobs
                .iter()
                .rev()
                .take(usize::try_from(limit).unwrap_or(usize::MAX))
                .cloned()
                .collect(),
            None => jobs.clone(),
        })
    }

    async fn find_by_id(&self, id: JobId) -> StoreResult<Option<Job>> {
        self.check_available()?;
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn contact_email_in_use(&self, email: &str) -> StoreResult<bool> {
        self.check_available()?;
        if self.stale_email_check.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let jobs = self.jobs.lock().unwrap();
        Ok(jobs.iter().any(|job| job.company.contact_email == email))
    }

    async fn insert(&self, input: CreateJob) -> StoreResult<Job> {
        self.check_available()?;
        let mut jobs = self.jobs.lock().unwrap();
        if jobs
            .iter()
            .any(|job| job.company.contact_email == input.company.contact_email)
        {
            return Err(StoreError::UniqueViolation(
                "idx_jobs_company_contact_email".to_string(),
            ));
        }
        let job = Job::from_create(JobId::new(), input, Utc::now());
        jobs.push(job.clone());
        Ok(job)
    }

    async fn update(&self, id: JobId, patch: &JobPatch) -> StoreResult<Option<Job>> {
        self.check_available()?;
        let mut jobs = self.jobs.lock().unwrap();
        if let Some(email) = patch.contact_email() {
            if jobs
                .iter()
                .any(|job| job.id != id && job.company.contact_email == email)
            {
                return Err(StoreError::UniqueViolation(
                    "idx_jobs_company_contact_email".to_string(),
                ));
            }
        }
        let Some(job) = jobs.iter_mut().find(|job| job.id == id) else {
            return Ok(None);
        };
        patch.apply_to(job);
        job.updated_at = Utc::now();
        Ok(Some(job.clone()))
    }

    async fn delete(&self, id: JobId) -> StoreResult<u64> {
        self.check_available()?;
        let mut jobs = self.jobs.lock().unwrap();
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        Ok((before - jobs.len()) as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.check_available()
    }
}

// =============================================================================
// In-memory User Store
// =============================================================================

#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl BaseUserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn insert(&self, input: CreateUser) -> StoreResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.email == input.email) {
            return Err(StoreError::UniqueViolation("idx_users_email".to_string()));
        }
        let user = User::from_create(UserId::new(), input, Utc::now());
        users.push(user.clone());
        Ok(user)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of in-memory stores plus a JWT service, kept around so tests can
/// inspect store state after driving the API.
pub struct TestDependencies {
    pub jobs: Arc<InMemoryJobStore>,
    pub users: Arc<InMemoryUserStore>,
    pub jwt_service: Arc<JwtService>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            jobs: Arc::new(InMemoryJobStore::new()),
            users: Arc::new(InMemoryUserStore::new()),
            jwt_service: Arc::new(JwtService::new("test_secret_key", "test_issuer".to_string(), 24)),
        }
    }

    /// Set a custom JWT service
    pub fn jwt(mut self, jwt_service: JwtService) -> Self {
        self.jwt_service = Arc::new(jwt_service);
        self
    }

    /// Convert into ServerDeps for testing
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.jobs.clone(),
            self.users.clone(),
            self.jwt_service.clone(),
            TEST_BCRYPT_COST,
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::jobs::data::CompanyPatch;
    use crate::domains::jobs::models::Company;

    fn create_job(title: &str, email: &str) -> CreateJob {
        CreateJob {
            title: title.to_string(),
            job_type: "Full-Time".to_string(),
            location: "Helsinki".to_string(),
            description: "Build things".to_string(),
            salary: "50k".to_string(),
            company: Company {
                name: "Acme".to_string(),
                description: "Widgets".to_string(),
                contact_email: email.to_string(),
                contact_phone: "+358".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_contact_email() {
        let store = InMemoryJobStore::new();
        store.insert(create_job("A", "hr@acme.test")).await.unwrap();

        let result = store.insert(create_job("B", "hr@acme.test")).await;

        assert!(matches!(result, Err(StoreError::UniqueViolation(_))));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_with_limit_is_newest_first() {
        let store = InMemoryJobStore::new();
        for i in 0..5 {
            store
                .insert(create_job(&format!("Job {i}"), &format!("hr{i}@acme.test")))
                .await
                .unwrap();
        }

        let titles: Vec<String> = store
            .list(Some(2))
            .await
            .unwrap()
            .into_iter()
            .map(|job| job.title)
            .collect();
        assert_eq!(titles, vec!["Job 4", "Job 3"]);

        let all = store.list(None).await.unwrap();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].title, "Job 0");
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_none() {
        let store = InMemoryJobStore::new();
        let result = store.update(JobId::new(), &JobPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_email_taken_by_other_job() {
        let store = InMemoryJobStore::new();
        store.insert(create_job("A", "a@acme.test")).await.unwrap();
        let b = store.insert(create_job("B", "b@acme.test")).await.unwrap();

        let patch = JobPatch {
            company: Some(CompanyPatch {
                contact_email: Some("a@acme.test".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = store.update(b.id, &patch).await;

        assert!(matches!(result, Err(StoreError::UniqueViolation(_))));
    }

    #[tokio::test]
    async fn test_delete_reports_removed_count() {
        let store = InMemoryJobStore::new();
        let job = store.insert(create_job("A", "a@acme.test")).await.unwrap();

        assert_eq!(store.delete(job.id).await.unwrap(), 1);
        assert_eq!(store.delete(job.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_stale_email_check_still_enforced_at_insert() {
        let store = InMemoryJobStore::new();
        store.insert(create_job("A", "a@acme.test")).await.unwrap();
        store.set_stale_email_check(true);

        assert!(!store.contact_email_in_use("a@acme.test").await.unwrap());
        let result = store.insert(create_job("B", "a@acme.test")).await;
        assert!(matches!(result, Err(StoreError::UniqueViolation(_))));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails() {
        let store = InMemoryJobStore::new();
        store.set_unavailable(true);

        assert!(matches!(store.list(None).await, Err(StoreError::Backend(_))));
        assert!(store.ping().await.is_err());
    }
}
