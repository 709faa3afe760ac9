use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::employee::{CreateEmployeeRequest, Employee, UpdateEmployeeRequest};
use crate::repositories::employee_repository::{EmployeeRepository, NewEmployee};
use crate::services::auth_service::hash_password;
use crate::utils::errors::AppError;

pub struct EmployeeController {
    repository: EmployeeRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateEmployeeRequest) -> Result<ApiResponse<Employee>, AppError> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let employee = self
            .repository
            .create(NewEmployee {
                name: &request.name,
                username: &request.username,
                email: &request.email,
                password_hash: &password_hash,
                position: &request.position,
                rating: request.rating.unwrap_or(0.0),
            })
            .await?;

        info!("👷 Empleado creado: {} (id {})", employee.username, employee.id);
        Ok(ApiResponse::success_with_message(employee, "Employee created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<Employee>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Employee>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateEmployeeRequest,
    ) -> Result<ApiResponse<Employee>, AppError> {
        request.validate()?;

        let employee = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(employee, "Employee updated"))
    }

    pub async fn deactivate(&self, id: i32) -> Result<ApiResponse<Employee>, AppError> {
        let employee = self.repository.deactivate(id).await?;
        info!("👷 Empleado {} dado de baja", id);

        Ok(ApiResponse::success_with_message(employee, "Employee deactivated"))
    }
}
