//! Update job action - partial overwrite, no re-validation

use tracing::{info, warn};

use crate::common::{AppError, JobId};
use crate::domains::jobs::data::JobPatch;
use crate::domains::jobs::models::Job;
use crate::kernel::ServerDeps;

const BAD_REQUEST: &str = "Bad request";

/// Overwrite the supplied fields of a job and return the updated record.
///
/// Unlike creation, the values are written as given. Every failure (malformed
/// id, unknown id, store error, contact email taken) is reported as
/// "Bad request".
pub async fn update_job(id: &str, patch: JobPatch, deps: &ServerDeps) -> Result<Job, AppError> {
    let job_id = JobId::parse(id).map_err(|e| {
        warn!(id, error = %e, "Update with malformed job id");
        AppError::invalid_input(BAD_REQUEST)
    })?;

    let updated = deps.jobs.update(job_id, &patch).await.map_err(|e| {
        warn!(%job_id, error = %e, "Job update rejected by store");
        AppError::invalid_input(BAD_REQUEST)
    })?;

    let Some(job) = updated else {
        warn!(%job_id, "Update for unknown job");
        return Err(AppError::invalid_input(BAD_REQUEST));
    };

    info!(%job_id, "Job updated");
    Ok(job)
}
