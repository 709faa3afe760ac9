use sqlx::PgPool;
use tracing::warn;

use crate::dto::api_response::ApiResponse;
use crate::models::customer::Customer;
use crate::models::dashboard::{
    BillingOverview, DashboardStats, ServiceJobOverview, ServiceRequestOverview, VehicleOverview,
};
use crate::models::inventory::InventoryItem;
use crate::repositories::dashboard_repository::DashboardRepository;
use crate::utils::errors::AppError;

pub struct DashboardController {
    repository: DashboardRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DashboardRepository::new(pool),
        }
    }

    /// El dashboard nunca falla: ante un error devuelve la foto a cero
    pub async fn stats(&self) -> ApiResponse<DashboardStats> {
        match self.repository.stats().await {
            Ok(stats) => ApiResponse::success(stats),
            Err(e) => {
                warn!("⚠️ Dashboard stats degradadas a cero: {}", e);
                ApiResponse::success_with_message(DashboardStats::default(), "Statistics unavailable")
            }
        }
    }

    pub async fn customers(&self) -> Result<ApiResponse<Vec<Customer>>, AppError> {
        Ok(ApiResponse::success(self.repository.customers().await?))
    }

    pub async fn vehicles(&self) -> Result<ApiResponse<Vec<VehicleOverview>>, AppError> {
        Ok(ApiResponse::success(self.repository.vehicles().await?))
    }

    pub async fn service_requests(&self) -> Result<ApiResponse<Vec<ServiceRequestOverview>>, AppError> {
        Ok(ApiResponse::success(self.repository.service_requests().await?))
    }

    pub async fn service_jobs(&self) -> Result<ApiResponse<Vec<ServiceJobOverview>>, AppError> {
        Ok(ApiResponse::success(self.repository.service_jobs().await?))
    }

    pub async fn inventory(&self) -> Result<ApiResponse<Vec<InventoryItem>>, AppError> {
        Ok(ApiResponse::success(self.repository.inventory().await?))
    }

    pub async fn billing(&self) -> Result<ApiResponse<Vec<BillingOverview>>, AppError> {
        Ok(ApiResponse::success(self.repository.billing().await?))
    }
}
