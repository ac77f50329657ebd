//! Create job action - validates a posting and inserts it

use tracing::{error, info};

use crate::common::validation::{filled, is_valid_email};
use crate::common::AppError;
use crate::domains::jobs::data::JobInput;
use crate::domains::jobs::models::{Company, CreateJob, Job};
use crate::kernel::{ServerDeps, StoreError};

const EMAIL_IN_USE: &str = "Email already in use";

/// Create a job posting.
///
/// This action:
/// 1. Requires every field, including the nested company fields
/// 2. Checks the contact email syntax
/// 3. Checks the contact email is not used by another posting
/// 4. Inserts the record
///
/// A unique-index rejection at insert (a concurrent duplicate slipping past
/// step 3) reports the same error as step 3.
pub async fn create_job(input: JobInput, deps: &ServerDeps) -> Result<Job, AppError> {
    let job = validate(input)?;

    let in_use = deps
        .jobs
        .contact_email_in_use(&job.company.contact_email)
        .await
        .map_err(internal)?;
    if in_use {
        return Err(AppError::invalid_input(EMAIL_IN_USE));
    }

    let job = deps.jobs.insert(job).await.map_err(|e| match e {
        StoreError::UniqueViolation(_) => AppError::invalid_input(EMAIL_IN_USE),
        other => internal(other),
    })?;

    info!(job_id = %job.id, title = %job.title, "Job created");
    Ok(job)
}

fn validate(input: JobInput) -> Result<CreateJob, AppError> {
    let company = input.company.unwrap_or_default();

    let (
        Some(title),
        Some(job_type),
        Some(location),
        Some(description),
        Some(salary),
        Some(name),
        Some(company_description),
        Some(contact_email),
        Some(contact_phone),
    ) = (
        filled(input.title),
        filled(input.job_type),
        filled(input.location),
        filled(input.description),
        filled(input.salary),
        filled(company.name),
        filled(company.description),
        filled(company.contact_email),
        filled(company.contact_phone),
    )
    else {
        return Err(AppError::invalid_input("All fields must be filled"));
    };

    if !is_valid_email(&contact_email) {
        return Err(AppError::invalid_input("Invalid email address"));
    }

    Ok(CreateJob {
        title,
        job_type,
        location,
        description,
        salary,
        company: Company {
            name,
            description: company_description,
            contact_email,
            contact_phone,
        },
    })
}

fn internal(err: StoreError) -> AppError {
    error!(error = %err, "Job store failure during create");
    AppError::Internal(err.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::jobs::actions::fixtures::job_input;
    use crate::kernel::TestDependencies;

    #[tokio::test]
    async fn test_create_job_assigns_id() {
        let test_deps = TestDependencies::new();

        let job = create_job(job_input("contact@nteksolutions.com"), &test_deps.server_deps())
            .await
            .unwrap();

        assert_eq!(job.title, "Senior React Developer");
        assert_eq!(job.company.contact_email, "contact@nteksolutions.com");
        assert_eq!(test_deps.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_create_job_missing_top_level_field() {
        let test_deps = TestDependencies::new();
        let mut input = job_input("a@acme.test");
        input.salary = None;

        let err = create_job(input, &test_deps.server_deps()).await.unwrap_err();

        assert_eq!(err.to_string(), "All fields must be filled");
        assert!(test_deps.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_job_missing_company() {
        let test_deps = TestDependencies::new();
        let mut input = job_input("a@acme.test");
        input.company = None;

        let err = create_job(input, &test_deps.server_deps()).await.unwrap_err();
        assert_eq!(err.to_string(), "All fields must be filled");
    }

    #[tokio::test]
    async fn test_create_job_empty_company_field() {
        let test_deps = TestDependencies::new();
        let mut input = job_input("a@acme.test");
        if let Some(company) = input.company.as_mut() {
            company.contact_phone = Some(String::new());
        }

        let err = create_job(input, &test_deps.server_deps()).await.unwrap_err();
        assert_eq!(err.to_string(), "All fields must be filled");
    }

    #[tokio::test]
    async fn test_create_job_invalid_email() {
        let test_deps = TestDependencies::new();

        let err = create_job(job_input("not-an-email"), &test_deps.server_deps())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid email address");
        assert!(test_deps.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_job_duplicate_email() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();
        create_job(job_input("a@acme.test"), &deps).await.unwrap();

        let err = create_job(job_input("a@acme.test"), &deps).await.unwrap_err();

        assert_eq!(err.to_string(), EMAIL_IN_USE);
        assert_eq!(test_deps.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_create_job_duplicate_caught_at_insert() {
        let test_deps = TestDependencies::new();
        let deps = test_deps.server_deps();
        create_job(job_input("a@acme.test"), &deps).await.unwrap();
        test_deps.jobs.set_stale_email_check(true);

        let err = create_job(job_input("a@acme.test"), &deps).await.unwrap_err();

        assert!(matches!(&err, AppError::InvalidInput(message) if message == EMAIL_IN_USE));
        assert_eq!(test_deps.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_create_job_store_failure() {
        let test_deps = TestDependencies::new();
        test_deps.jobs.set_unavailable(true);

        let err = create_job(job_input("a@acme.test"), &test_deps.server_deps())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
