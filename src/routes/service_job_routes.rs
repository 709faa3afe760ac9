use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::service_job_controller::ServiceJobController;
use crate::dto::api_response::ApiResponse;
use crate::models::service_job::{
    AssignJobRequest, CreateJobRequest, ServiceJob, UpdateJobStatusRequest, UpdateLaborChargeRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_service_job_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_jobs).post(create_job))
        .route("/:id", get(get_job))
        .route("/:id/assign", put(assign_job))
        .route("/:id/status", put(update_job_status))
        .route("/:id/labor", put(update_labor_charge))
}

async fn create_job(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateJobRequest>,
) -> Result<Json<ApiResponse<ServiceJob>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ServiceJob>>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_job(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<ServiceJob>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn assign_job(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<AssignJobRequest>,
) -> Result<Json<ApiResponse<ServiceJob>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.assign(id, request).await?))
}

async fn update_job_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateJobStatusRequest>,
) -> Result<Json<ApiResponse<ServiceJob>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request).await?))
}

async fn update_labor_charge(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateLaborChargeRequest>,
) -> Result<Json<ApiResponse<ServiceJob>>, AppError> {
    let controller = ServiceJobController::new(state.pool.clone());
    Ok(Json(controller.update_labor_charge(id, request).await?))
}
