use sqlx::PgPool;

use crate::models::billing::{BillAmounts, Billing, PaymentStatus, UpdateBillRequest};
use crate::models::job_part::parts_total;
use crate::models::service_job::JobStatus;
use crate::repositories::job_part_repository::parts_for_job;
use crate::repositories::service_job_repository::lock_job;
use crate::utils::errors::{is_unique_violation, not_found_error, AppError, AppResult};
use crate::utils::validation::ensure_money_amount;

pub struct BillingRepository {
    pool: PgPool,
}

impl BillingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Genera la factura de un job completado: mano de obra del job más la
    /// suma de sus repuestos a precio capturado. Nunca se genera dos veces;
    /// las correcciones van por `update`.
    pub async fn generate(&self, job_id: i32) -> AppResult<Billing> {
        let mut tx = self.pool.begin().await?;

        let job = lock_job(&mut *tx, job_id).await?;
        if job.job_status != JobStatus::Completed {
            return Err(AppError::JobNotComplete(format!(
                "job {} is {}",
                job_id,
                job.job_status.as_str()
            )));
        }

        let existing = sqlx::query_scalar::<_, i32>("SELECT bill_id FROM billing WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some(bill_id) = existing {
            return Err(duplicate_bill(job_id, Some(bill_id)));
        }

        let parts = parts_for_job(&mut *tx, job_id).await?;
        let amounts = BillAmounts::new(job.labor_charge, parts_total(&parts));
        amounts.ensure_storable()?;

        let bill = sqlx::query_as::<_, Billing>(
            r#"
            INSERT INTO billing (job_id, labor_amount, parts_amount, total_amount, payment_status, bill_date)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(amounts.labor_amount)
        .bind(amounts.parts_amount)
        .bind(amounts.total_amount)
        .bind(PaymentStatus::Unpaid)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_bill(job_id, None)
            } else {
                AppError::Database(e)
            }
        })?;

        tx.commit().await?;
        Ok(bill)
    }

    pub async fn find_by_id(&self, bill_id: i32) -> AppResult<Option<Billing>> {
        let bill = sqlx::query_as::<_, Billing>("SELECT * FROM billing WHERE bill_id = $1")
            .bind(bill_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(bill)
    }

    pub async fn get(&self, bill_id: i32) -> AppResult<Billing> {
        self.find_by_id(bill_id)
            .await?
            .ok_or_else(|| not_found_error("Bill", bill_id))
    }

    pub async fn get_by_job(&self, job_id: i32) -> AppResult<Billing> {
        sqlx::query_as::<_, Billing>("SELECT * FROM billing WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No bill found for job '{}'", job_id)))
    }

    pub async fn list(&self) -> AppResult<Vec<Billing>> {
        let bills = sqlx::query_as::<_, Billing>(
            "SELECT * FROM billing ORDER BY bill_date DESC, bill_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    /// Unpaid -> Paid. Marcar dos veces no cambia `paid_at`.
    pub async fn mark_paid(&self, bill_id: i32) -> AppResult<Billing> {
        sqlx::query_as::<_, Billing>(
            r#"
            UPDATE billing
            SET payment_status = $2, paid_at = COALESCE(paid_at, NOW())
            WHERE bill_id = $1
            RETURNING *
            "#,
        )
        .bind(bill_id)
        .bind(PaymentStatus::Paid)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Bill", bill_id))
    }

    /// Corrección manual de importes. No toca el inventario.
    pub async fn update(&self, bill_id: i32, request: &UpdateBillRequest) -> AppResult<Billing> {
        for (field, value) in [
            ("labor_amount", request.labor_amount),
            ("parts_amount", request.parts_amount),
        ] {
            if let Some(value) = value {
                ensure_money_amount(field, value)?;
            }
        }

        let mut tx = self.pool.begin().await?;

        let bill = sqlx::query_as::<_, Billing>("SELECT * FROM billing WHERE bill_id = $1 FOR UPDATE")
            .bind(bill_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Bill", bill_id))?;

        let amounts = BillAmounts::from(&bill).corrected(request.labor_amount, request.parts_amount);
        amounts.ensure_storable()?;

        let bill = sqlx::query_as::<_, Billing>(
            r#"
            UPDATE billing
            SET labor_amount = $2, parts_amount = $3, total_amount = $4
            WHERE bill_id = $1
            RETURNING *
            "#,
        )
        .bind(bill_id)
        .bind(amounts.labor_amount)
        .bind(amounts.parts_amount)
        .bind(amounts.total_amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(bill)
    }
}

fn duplicate_bill(job_id: i32, bill_id: Option<i32>) -> AppError {
    match bill_id {
        Some(bill_id) => AppError::DuplicateBill(format!(
            "job {} already has bill {}; use update instead",
            job_id, bill_id
        )),
        None => AppError::DuplicateBill(format!("job {} already has a bill", job_id)),
    }
}
