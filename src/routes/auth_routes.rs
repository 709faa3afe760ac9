use axum::{extract::State, routing::{get, post}, Extension, Json, Router};

use crate::controllers::auth_controller::AuthController;
use crate::dto::api_response::ApiResponse;
use crate::models::auth::{AuthResponse, AuthenticatedEmployee, LoginRequest, SignupRequest};
use crate::models::employee::Employee;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::JsonBody;

/// Rutas públicas: registro y login
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Rutas que requieren token
pub fn create_session_router() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

async fn signup(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<SignupRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.auth_service.clone());
    let response = controller.signup(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, AppError> {
    let controller = AuthController::new(state.auth_service.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedEmployee>,
) -> Json<ApiResponse<Employee>> {
    let controller = AuthController::new(state.auth_service.clone());
    Json(controller.me(current.employee))
}
