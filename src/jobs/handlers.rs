use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    extract::JsonBody,
    jobs::{
        dto::{CreateJobRequest, DeletedJob, UpdateJobRequest},
        repo::Job,
    },
    state::AppState,
};

#[instrument(skip(state))]
pub async fn list_jobs(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Job>>, ApiError> {
    let jobs = Job::list_by_owner(&state.db, user_id).await?;
    Ok(Json(jobs))
}

#[instrument(skip(state, payload))]
pub async fn create_job(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    JsonBody(payload): JsonBody<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    let company = payload.company.trim();
    let position = payload.position.trim();
    if company.is_empty() || position.is_empty() {
        warn!("job created without company or position");
        return Err(ApiError::Validation("Please add company and position".into()));
    }

    // Owner comes from the token, never from the payload.
    let job = Job::create(&state.db, user_id, company, position, payload.status).await?;

    info!(job_id = %job.id, user_id = %user_id, "job created");
    Ok((StatusCode::CREATED, Json(job)))
}

/// The authorization invariant for update and delete: the requester must
/// equal the stored owner, checked on the record as it exists now.
fn check_owner(job: &Job, user_id: Uuid) -> Result<(), ApiError> {
    if job.user_id != user_id {
        warn!(job_id = %job.id, user_id = %user_id, owner = %job.user_id, "ownership check failed");
        return Err(ApiError::Forbidden);
    }
    Ok(())
}

fn found<T>(row: Option<T>) -> Result<T, ApiError> {
    row.ok_or_else(|| ApiError::NotFound("Job not found".into()))
}

/// Loads the record and checks ownership before any mutation.
async fn find_owned(db: &sqlx::PgPool, id: Uuid, user_id: Uuid) -> Result<Job, ApiError> {
    let job = found(Job::find_by_id(db, id).await?)?;
    check_owner(&job, user_id)?;
    Ok(job)
}

#[instrument(skip(state, payload))]
pub async fn update_job(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<UpdateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    find_owned(&state.db, id, user_id).await?;

    let company = payload.company.as_deref().map(str::trim);
    let position = payload.position.as_deref().map(str::trim);
    if company.is_some_and(str::is_empty) || position.is_some_and(str::is_empty) {
        return Err(ApiError::Validation(
            "Company and position cannot be empty".into(),
        ));
    }

    // The row can vanish between the check and the write; that race ends
    // here as a plain not-found.
    let job = found(Job::update(&state.db, id, company, position, payload.status).await?)?;

    info!(job_id = %id, user_id = %user_id, "job updated");
    Ok(Json(job))
}

#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeletedJob>, ApiError> {
    find_owned(&state.db, id, user_id).await?;

    let deleted = found(Job::delete(&state.db, id).await?)?;

    info!(job_id = %deleted, user_id = %user_id, "job deleted");
    Ok(Json(DeletedJob { id: deleted }))
}
