//! Job query actions

use anyhow::anyhow;
use tracing::{debug, error};

use crate::common::{AppError, JobId};
use crate::domains::jobs::models::Job;
use crate::kernel::ServerDeps;

/// All jobs in creation order, or the `limit` newest ones newest-first
pub async fn list_jobs(limit: Option<i64>, deps: &ServerDeps) -> Result<Vec<Job>, AppError> {
    debug!(?limit, "Listing jobs");

    deps.jobs.list(limit).await.map_err(|e| {
        error!(error = %e, "Failed to list jobs");
        AppError::Internal(e.into())
    })
}

/// Fetch one job.
///
/// An id that does not parse is a server error here, not a 404: only a
/// successful lookup that finds nothing counts as "not found".
pub async fn get_job(id: &str, deps: &ServerDeps) -> Result<Job, AppError> {
    let job_id = JobId::parse(id).map_err(|e| {
        error!(id, error = %e, "Malformed job id");
        AppError::Internal(anyhow!("malformed job id {id}: {e}"))
    })?;

    let job = deps.jobs.find_by_id(job_id).await.map_err(|e| {
        error!(%job_id, error = %e, "Failed to load job");
        AppError::Internal(e.into())
    })?;

    job.ok_or_else(|| AppError::not_found("Job not found"))
}
