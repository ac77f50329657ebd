use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::JobId;
use crate::domains::jobs::data::JobPatch;

/// Company that published a job posting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[sqlx(rename = "company_name")]
    pub name: String,
    #[sqlx(rename = "company_description")]
    pub description: String,
    /// Unique across all postings
    #[sqlx(rename = "company_contact_email")]
    pub contact_email: String,
    #[sqlx(rename = "company_contact_phone")]
    pub contact_phone: String,
}

/// Job posting - the only collection the job board manages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub location: String,
    pub description: String,
    /// Free-form text ("50k", "negotiable"), never parsed
    pub salary: String,
    #[sqlx(flatten)]
    pub company: Company,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully validated input for inserting a job
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJob {
    pub title: String,
    pub job_type: String,
    pub location: String,
    pub description: String,
    pub salary: String,
    pub company: Company,
}

impl Job {
    /// Build a record from validated input (used by stores that assign their own timestamps)
    pub fn from_create(id: JobId, input: CreateJob, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: input.title,
            job_type: input.job_type,
            location: input.location,
            description: input.description,
            salary: input.salary,
            company: input.company,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Job {
    /// All jobs in creation order
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Self>("SELECT * FROM jobs ORDER BY created_at ASC, id ASC")
            .fetch_all(pool)
            .await?;
        Ok(jobs)
    }

    /// The `limit` most recently created jobs, newest first
    pub async fn find_newest(limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        let jobs = sqlx::query_as::<_, Self>(
            r#"
            SELECT *
            FROM jobs
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(jobs)
    }

    pub async fn find_by_id(id: JobId, pool: &PgPool) -> Result<Option<Self>> {
        let job = sqlx::query_as::<_, Self>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(job)
    }

    /// Check whether any posting already uses this company contact email
    pub async fn contact_email_exists(email: &str, pool: &PgPool) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM jobs WHERE company_contact_email = $1)",
        )
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Insert a job. A duplicate contact email fails with a unique violation
    /// from `idx_jobs_company_contact_email`.
    pub async fn create(input: &CreateJob, pool: &PgPool) -> Result<Self> {
        let job = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO jobs (
                id, title, job_type, location, description, salary,
                company_name, company_description, company_contact_email, company_contact_phone
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(JobId::new())
        .bind(&input.title)
        .bind(&input.job_type)
        .bind(&input.location)
        .bind(&input.description)
        .bind(&input.salary)
        .bind(&input.company.name)
        .bind(&input.company.description)
        .bind(&input.company.contact_email)
        .bind(&input.company.contact_phone)
        .fetch_one(pool)
        .await?;
        Ok(job)
    }

    /// Overwrite the fields present in `patch`, leaving the rest untouched.
    ///
    /// Returns `None` when no job has this id.
    pub async fn update(id: JobId, patch: &JobPatch, pool: &PgPool) -> Result<Option<Self>> {
        let company = patch.company.clone().unwrap_or_default();
        let job = sqlx::query_as::<_, Self>(
            r#"
            UPDATE jobs SET
                title = COALESCE($2, title),
                job_type = COALESCE($3, job_type),
                location = COALESCE($4, location),
                description = COALESCE($5, description),
                salary = COALESCE($6, salary),
                company_name = COALESCE($7, company_name),
                company_description = COALESCE($8, company_description),
                company_contact_email = COALESCE($9, company_contact_email),
                company_contact_phone = COALESCE($10, company_contact_phone),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.title)
        .bind(&patch.job_type)
        .bind(&patch.location)
        .bind(&patch.description)
        .bind(&patch.salary)
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.contact_email)
        .bind(&company.contact_phone)
        .fetch_optional(pool)
        .await?;
        Ok(job)
    }

    /// Delete a job, returning the number of rows removed (0 or 1)
    pub async fn delete(id: JobId, pool: &PgPool) -> Result<u64> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Job {
        Job::from_create(
            JobId::new(),
            CreateJob {
                title: "Engineer".to_string(),
                job_type: "Full-Time".to_string(),
                location: "Helsinki".to_string(),
                description: "Build things".to_string(),
                salary: "50k".to_string(),
                company: Company {
                    name: "Acme".to_string(),
                    description: "Widgets".to_string(),
                    contact_email: "hr@acme.test".to_string(),
                    contact_phone: "+358401234567".to_string(),
                },
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_job_serializes_with_wire_field_names() {
        let job = sample();
        let value = serde_json::to_value(&job).unwrap();

        assert_eq!(value["id"], json!(job.id.to_string()));
        assert_eq!(value["type"], json!("Full-Time"));
        assert_eq!(value["company"]["contactEmail"], json!("hr@acme.test"));
        assert_eq!(value["company"]["contactPhone"], json!("+358401234567"));
        assert!(value.get("job_type").is_none());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_from_create_sets_both_timestamps() {
        let job = sample();
        assert_eq!(job.created_at, job.updated_at);
    }
}
