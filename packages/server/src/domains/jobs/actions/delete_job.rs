//! Delete job action

use tracing::{info, warn};

use crate::common::{AppError, JobId};
use crate::kernel::ServerDeps;

/// Remove a job.
///
/// Nothing removed is reported as a client error naming the id; a malformed
/// id or store failure is "Bad request".
pub async fn delete_job(id: &str, deps: &ServerDeps) -> Result<(), AppError> {
    let job_id = JobId::parse(id).map_err(|e| {
        warn!(id, error = %e, "Delete with malformed job id");
        AppError::invalid_input("Bad request")
    })?;

    let removed = deps.jobs.delete(job_id).await.map_err(|e| {
        warn!(%job_id, error = %e, "Job delete failed");
        AppError::invalid_input("Bad request")
    })?;

    if removed == 0 {
        return Err(AppError::invalid_input(format!("No job found with id {id}")));
    }

    info!(%job_id, "Job deleted");
    Ok(())
}
