use axum::{
    extract::State,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::billing_controller::BillingController;
use crate::dto::api_response::ApiResponse;
use crate::models::billing::{Billing, GenerateBillRequest, UpdateBillRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_billing_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bills))
        .route("/generate", post(generate_bill))
        .route("/job/:job_id", get(get_bill_by_job))
        .route("/:id", get(get_bill).put(update_bill))
        .route("/:id/pay", put(mark_bill_paid))
}

async fn generate_bill(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<GenerateBillRequest>,
) -> Result<Json<ApiResponse<Billing>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.generate(request).await?))
}

async fn list_bills(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Billing>>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_bill(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<Billing>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn get_bill_by_job(
    State(state): State<AppState>,
    PathParam(job_id): PathParam<i32>,
) -> Result<Json<ApiResponse<Billing>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.get_by_job(job_id).await?))
}

async fn update_bill(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateBillRequest>,
) -> Result<Json<ApiResponse<Billing>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn mark_bill_paid(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<Billing>>, AppError> {
    let controller = BillingController::new(state.pool.clone());
    Ok(Json(controller.mark_paid(id).await?))
}
