use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    Json,
};
use tracing::debug;

use crate::common::AppError;
use crate::domains::jobs::actions;
use crate::domains::jobs::data::{JobInput, JobPatch, ListJobsQuery};
use crate::domains::jobs::models::Job;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

/// List and Get are open to anonymous callers only when the server says so
fn require_reader(state: &AppState, auth: Result<AuthUser, AppError>) -> Result<(), AppError> {
    match auth {
        Ok(_) => Ok(()),
        Err(_) if state.public_job_reads => Ok(()),
        Err(rejection) => Err(rejection),
    }
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!(error = %rejection, "Rejected job payload");
        AppError::invalid_input("Bad request")
    })
}

/// A create request without a JSON body reads as an empty job, so validation
/// reports the missing fields. A JSON body that does not parse is still a bad
/// request.
fn create_payload(headers: &HeaderMap, body: &Bytes) -> Result<JobInput, AppError> {
    if !has_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JobInput::default());
    }
    json_body(Json::from_bytes(body))
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// GET /api/jobs?_limit=N
pub async fn list_jobs_handler(
    Extension(state): Extension<AppState>,
    auth: Result<AuthUser, AppError>,
    query: Option<Query<ListJobsQuery>>,
) -> Result<Json<Vec<Job>>, AppError> {
    require_reader(&state, auth)?;
    let limit = query.and_then(|Query(query)| query.limit());

    let jobs = actions::list_jobs(limit, &state.deps).await?;
    Ok(Json(jobs))
}

/// GET /api/jobs/:id
pub async fn get_job_handler(
    Extension(state): Extension<AppState>,
    auth: Result<AuthUser, AppError>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    require_reader(&state, auth)?;

    let job = actions::get_job(&id, &state.deps).await?;
    Ok(Json(job))
}

/// POST /api/jobs/create
pub async fn create_job_handler(
    Extension(state): Extension<AppState>,
    _auth: AuthUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let input = create_payload(&headers, &body)?;

    let job = actions::create_job(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /api/jobs/:id
pub async fn update_job_handler(
    Extension(state): Extension<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    payload: Result<Json<JobPatch>, JsonRejection>,
) -> Result<Json<Job>, AppError> {
    let patch = json_body(payload)?;

    let job = actions::update_job(&id, patch, &state.deps).await?;
    Ok(Json(job))
}

/// DELETE /api/jobs/:id
pub async fn delete_job_handler(
    Extension(state): Extension<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    actions::delete_job(&id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
