use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::customer_controller::CustomerController;
use crate::dto::api_response::ApiResponse;
use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_customer_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/:id", get(get_customer).put(update_customer))
}

async fn create_customer(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_customers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Customer>>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_customer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_customer(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateCustomerRequest>,
) -> Result<Json<ApiResponse<Customer>>, AppError> {
    let controller = CustomerController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}
