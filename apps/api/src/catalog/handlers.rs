use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::JobRecord;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobRecord>,
    pub total: usize,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let jobs = state.catalog.jobs().to_vec();
    let total = jobs.len();
    Json(JobListResponse { jobs, total })
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobRecord>, AppError> {
    let job = state
        .catalog
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job.clone()))
}
