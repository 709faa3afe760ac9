use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::service_request_controller::ServiceRequestController;
use crate::dto::api_response::ApiResponse;
use crate::models::service_request::{
    CreateServiceRequestRequest, ServiceRequest, UpdateServiceRequestStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_service_request_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_requests).post(create_request))
        .route("/:id", get(get_request))
        .route("/:id/status", put(update_request_status))
}

async fn create_request(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateServiceRequestRequest>,
) -> Result<Json<ApiResponse<ServiceRequest>>, AppError> {
    let controller = ServiceRequestController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ServiceRequest>>>, AppError> {
    let controller = ServiceRequestController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_request(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<ServiceRequest>>, AppError> {
    let controller = ServiceRequestController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_request_status(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateServiceRequestStatusRequest>,
) -> Result<Json<ApiResponse<ServiceRequest>>, AppError> {
    let controller = ServiceRequestController::new(state.pool.clone());
    Ok(Json(controller.update_status(id, request).await?))
}
