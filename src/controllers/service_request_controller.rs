use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::service_request::{
    CreateServiceRequestRequest, ServiceRequest, UpdateServiceRequestStatusRequest,
};
use crate::repositories::service_request_repository::ServiceRequestRepository;
use crate::utils::errors::AppError;

pub struct ServiceRequestController {
    repository: ServiceRequestRepository,
}

impl ServiceRequestController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRequestRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceRequestRequest,
    ) -> Result<ApiResponse<ServiceRequest>, AppError> {
        request.validate()?;

        let service_request = self.repository.create(&request).await?;
        info!(
            "📝 Pedido {} abierto para vehículo {}",
            service_request.request_id, service_request.vehicle_id
        );

        Ok(ApiResponse::success_with_message(service_request, "Service request created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<ServiceRequest>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<ServiceRequest>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn update_status(
        &self,
        id: i32,
        request: UpdateServiceRequestStatusRequest,
    ) -> Result<ApiResponse<ServiceRequest>, AppError> {
        let service_request = self.repository.update_status(id, request.status).await?;
        info!("📝 Pedido {} -> {}", id, request.status.as_str());

        Ok(ApiResponse::success_with_message(service_request, "Status updated"))
    }
}
