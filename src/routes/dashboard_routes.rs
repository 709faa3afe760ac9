use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::api_response::ApiResponse;
use crate::models::customer::Customer;
use crate::models::dashboard::{
    BillingOverview, DashboardStats, ServiceJobOverview, ServiceRequestOverview, VehicleOverview,
};
use crate::models::inventory::InventoryItem;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_stats))
        .route("/customers", get(get_customers))
        .route("/vehicles", get(get_vehicles))
        .route("/service-requests", get(get_service_requests))
        .route("/service-jobs", get(get_service_jobs))
        .route("/inventory", get(get_inventory))
        .route("/billing", get(get_billing))
}

async fn get_stats(State(state): State<AppState>) -> Json<ApiResponse<DashboardStats>> {
    let controller = DashboardController::new(state.pool.clone());
    Json(controller.stats().await)
}

async fn get_customers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.customers().await?))
}

async fn get_vehicles(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<VehicleOverview>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.vehicles().await?))
}

async fn get_service_requests(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ServiceRequestOverview>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.service_requests().await?))
}

async fn get_service_jobs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ServiceJobOverview>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.service_jobs().await?))
}

async fn get_inventory(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.inventory().await?))
}

async fn get_billing(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<BillingOverview>>>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    Ok(Json(controller.billing().await?))
}
