use axum::{
    extract::State,
    routing::get,
    Json, Router,
};

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::api_response::ApiResponse;
use crate::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/:id",
            get(get_employee).put(update_employee).delete(deactivate_employee),
        )
}

async fn create_employee(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateEmployeeRequest>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn deactivate_employee(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<Employee>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    Ok(Json(controller.deactivate(id).await?))
}
