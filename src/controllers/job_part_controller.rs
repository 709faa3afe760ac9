use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::job_part::{AttachPartRequest, JobPart, JobPartDetail, JobPartsTotal};
use crate::repositories::job_part_repository::JobPartRepository;
use crate::utils::errors::AppError;

pub struct JobPartController {
    repository: JobPartRepository,
}

impl JobPartController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: JobPartRepository::new(pool),
        }
    }

    pub async fn attach(&self, request: AttachPartRequest) -> Result<ApiResponse<JobPart>, AppError> {
        request.validate()?;

        let part = self.repository.attach(&request).await?;
        info!(
            "🔩 {} x repuesto {} al job {} a {}",
            part.quantity_used, part.item_id, part.job_id, part.unit_price_at_time
        );

        Ok(ApiResponse::success_with_message(part, "Part attached"))
    }

    pub async fn remove(&self, job_part_id: i32) -> Result<ApiResponse<JobPart>, AppError> {
        let part = self.repository.remove(job_part_id).await?;
        info!("🔩 Enlace {} quitado, {} unidades devueltas al stock", job_part_id, part.quantity_used);

        Ok(ApiResponse::success_with_message(part, "Part removed"))
    }

    pub async fn list_for_job(&self, job_id: i32) -> Result<ApiResponse<Vec<JobPartDetail>>, AppError> {
        Ok(ApiResponse::success(self.repository.list_for_job(job_id).await?))
    }

    pub async fn total_for_job(&self, job_id: i32) -> Result<ApiResponse<JobPartsTotal>, AppError> {
        Ok(ApiResponse::success(self.repository.compute_total(job_id).await?))
    }
}
