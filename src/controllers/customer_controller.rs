use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::repositories::customer_repository::CustomerRepository;
use crate::utils::errors::AppError;

pub struct CustomerController {
    repository: CustomerRepository,
}

impl CustomerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CustomerRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCustomerRequest) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let customer = self.repository.create(&request).await?;
        info!("🧑 Cliente creado: {}", customer.customer_id);

        Ok(ApiResponse::success_with_message(customer, "Customer created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<Customer>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Customer>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateCustomerRequest,
    ) -> Result<ApiResponse<Customer>, AppError> {
        request.validate()?;

        let customer = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(customer, "Customer updated"))
    }
}
