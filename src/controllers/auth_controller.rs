use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::models::employee::Employee;
use crate::services::auth_service::AuthService;
use crate::utils::errors::AppError;

pub struct AuthController {
    service: Arc<AuthService>,
}

impl AuthController {
    pub fn new(service: Arc<AuthService>) -> Self {
        Self { service }
    }

    pub async fn signup(&self, request: SignupRequest) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let response = self.service.signup(&request).await?;
        info!("👤 Empleado registrado: {} (id {})", response.employee.username, response.employee.id);

        Ok(ApiResponse::success_with_message(response, "Signup successful"))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<ApiResponse<AuthResponse>, AppError> {
        request.validate()?;

        let response = self.service.login(&request).await?;
        info!("🔑 Login de {}", response.employee.username);

        Ok(ApiResponse::success_with_message(response, "Login successful"))
    }

    pub fn me(&self, employee: Employee) -> ApiResponse<Employee> {
        ApiResponse::success(employee)
    }
}
