use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::service_job::{
    AssignJobRequest, CreateJobRequest, ServiceJob, UpdateJobStatusRequest, UpdateLaborChargeRequest,
};
use crate::repositories::service_job_repository::ServiceJobRepository;
use crate::utils::errors::AppError;

pub struct ServiceJobController {
    repository: ServiceJobRepository,
}

impl ServiceJobController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceJobRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateJobRequest) -> Result<ApiResponse<ServiceJob>, AppError> {
        request.validate()?;

        let job = self.repository.create(request.request_id).await?;
        info!("🔧 Job {} creado para pedido {}", job.job_id, job.request_id);

        Ok(ApiResponse::success_with_message(job, "Service job created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<ServiceJob>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<ServiceJob>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn assign(&self, id: i32, request: AssignJobRequest) -> Result<ApiResponse<ServiceJob>, AppError> {
        request.validate()?;

        let job = self.repository.assign(id, request.employee_id).await?;
        info!("🔧 Job {} asignado a empleado {}", id, request.employee_id);

        Ok(ApiResponse::success_with_message(job, "Employee assigned"))
    }

    pub async fn update_status(
        &self,
        id: i32,
        request: UpdateJobStatusRequest,
    ) -> Result<ApiResponse<ServiceJob>, AppError> {
        let job = self.repository.update_status(id, request.status).await?;
        info!("🔧 Job {} -> {}", id, job.job_status.as_str());

        Ok(ApiResponse::success_with_message(job, "Status updated"))
    }

    pub async fn update_labor_charge(
        &self,
        id: i32,
        request: UpdateLaborChargeRequest,
    ) -> Result<ApiResponse<ServiceJob>, AppError> {
        request.validate()?;

        let job = self.repository.update_labor_charge(id, request.labor_charge).await?;
        info!("🔧 Job {} mano de obra = {}", id, job.labor_charge);

        Ok(ApiResponse::success_with_message(job, "Labor charge updated"))
    }
}
