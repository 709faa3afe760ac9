use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::billing::{Billing, GenerateBillRequest, UpdateBillRequest};
use crate::repositories::billing_repository::BillingRepository;
use crate::utils::errors::AppError;

pub struct BillingController {
    repository: BillingRepository,
}

impl BillingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BillingRepository::new(pool),
        }
    }

    pub async fn generate(&self, request: GenerateBillRequest) -> Result<ApiResponse<Billing>, AppError> {
        request.validate()?;

        let bill = self.repository.generate(request.job_id).await?;
        info!(
            "🧾 Factura {} para job {}: {} + {} = {}",
            bill.bill_id, bill.job_id, bill.labor_amount, bill.parts_amount, bill.total_amount
        );

        Ok(ApiResponse::success_with_message(bill, "Bill generated"))
    }

    pub async fn get(&self, bill_id: i32) -> Result<ApiResponse<Billing>, AppError> {
        Ok(ApiResponse::success(self.repository.get(bill_id).await?))
    }

    pub async fn get_by_job(&self, job_id: i32) -> Result<ApiResponse<Billing>, AppError> {
        Ok(ApiResponse::success(self.repository.get_by_job(job_id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<Billing>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn mark_paid(&self, bill_id: i32) -> Result<ApiResponse<Billing>, AppError> {
        let bill = self.repository.mark_paid(bill_id).await?;
        info!("💰 Factura {} pagada", bill_id);

        Ok(ApiResponse::success_with_message(bill, "Bill marked as paid"))
    }

    pub async fn update(
        &self,
        bill_id: i32,
        request: UpdateBillRequest,
    ) -> Result<ApiResponse<Billing>, AppError> {
        request.validate()?;

        let bill = self.repository.update(bill_id, &request).await?;
        info!("🧾 Factura {} corregida: total {}", bill_id, bill.total_amount);

        Ok(ApiResponse::success_with_message(bill, "Bill updated"))
    }
}
