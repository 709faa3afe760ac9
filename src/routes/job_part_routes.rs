use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::job_part_controller::JobPartController;
use crate::dto::api_response::ApiResponse;
use crate::models::job_part::{AttachPartRequest, JobPart, JobPartDetail, JobPartsTotal};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_job_part_router() -> Router<AppState> {
    Router::new()
        .route("/", post(attach_part))
        .route("/:id", delete(remove_part))
        .route("/job/:job_id", get(list_job_parts))
        .route("/job/:job_id/total", get(job_parts_total))
}

async fn attach_part(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<AttachPartRequest>,
) -> Result<Json<ApiResponse<JobPart>>, AppError> {
    let controller = JobPartController::new(state.pool.clone());
    Ok(Json(controller.attach(request).await?))
}

async fn remove_part(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<JobPart>>, AppError> {
    let controller = JobPartController::new(state.pool.clone());
    Ok(Json(controller.remove(id).await?))
}

async fn list_job_parts(
    State(state): State<AppState>,
    PathParam(job_id): PathParam<i32>,
) -> Result<Json<ApiResponse<Vec<JobPartDetail>>>, AppError> {
    let controller = JobPartController::new(state.pool.clone());
    Ok(Json(controller.list_for_job(job_id).await?))
}

async fn job_parts_total(
    State(state): State<AppState>,
    PathParam(job_id): PathParam<i32>,
) -> Result<Json<ApiResponse<JobPartsTotal>>, AppError> {
    let controller = JobPartController::new(state.pool.clone());
    Ok(Json(controller.total_for_job(job_id).await?))
}
