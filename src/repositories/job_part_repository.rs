use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::job_part::{parts_total, AttachPartRequest, JobPart, JobPartDetail, JobPartsTotal};
use crate::models::service_job::JobStatus;
use crate::repositories::inventory_repository::adjust_stock_in;
use crate::repositories::service_job_repository::{ensure_unbilled, lock_job};
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};
use crate::utils::validation::ensure_money_amount;

pub struct JobPartRepository {
    pool: PgPool,
}

impl JobPartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adjunta un repuesto al job y descuenta el stock en la misma
    /// transacción. Si no hay stock suficiente no se crea nada.
    pub async fn attach(&self, request: &AttachPartRequest) -> AppResult<JobPart> {
        if request.quantity_used <= 0 {
            return Err(validation_error("quantity_used", "must be greater than zero"));
        }

        let mut tx = self.pool.begin().await?;

        let job = lock_job(&mut *tx, request.job_id).await?;
        if job.job_status == JobStatus::Cancelled {
            return Err(AppError::InvalidTransition(format!(
                "job {} is cancelled",
                request.job_id
            )));
        }
        ensure_unbilled(&mut *tx, request.job_id).await?;

        let item = adjust_stock_in(&mut *tx, request.item_id, -request.quantity_used).await?;

        let line_total = Decimal::from(request.quantity_used) * item.unit_price;
        let current = parts_total(&parts_for_job(&mut *tx, request.job_id).await?);
        ensure_money_amount("quantity_used", current + line_total)?;

        let part = sqlx::query_as::<_, JobPart>(
            r#"
            INSERT INTO job_parts (job_id, item_id, quantity_used, unit_price_at_time)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.job_id)
        .bind(item.item_id)
        .bind(request.quantity_used)
        .bind(item.unit_price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(part)
    }

    /// Quita el repuesto del job y devuelve la cantidad al inventario.
    pub async fn remove(&self, job_part_id: i32) -> AppResult<JobPart> {
        let mut tx = self.pool.begin().await?;

        let job_id = sqlx::query_scalar::<_, i32>(
            "SELECT job_id FROM job_parts WHERE job_part_id = $1",
        )
        .bind(job_part_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Job part", job_part_id))?;

        lock_job(&mut *tx, job_id).await?;
        ensure_unbilled(&mut *tx, job_id).await?;

        // Con el job bloqueado, un borrado concurrente del mismo enlace ya no devuelve fila
        let part = sqlx::query_as::<_, JobPart>(
            "DELETE FROM job_parts WHERE job_part_id = $1 RETURNING *",
        )
        .bind(job_part_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Job part", job_part_id))?;

        adjust_stock_in(&mut *tx, part.item_id, part.quantity_used).await?;

        tx.commit().await?;
        Ok(part)
    }

    pub async fn list_for_job(&self, job_id: i32) -> AppResult<Vec<JobPartDetail>> {
        self.ensure_job_exists(job_id).await?;

        let parts = sqlx::query_as::<_, JobPartDetail>(
            r#"
            SELECT jp.job_part_id, jp.job_id, jp.item_id, i.part_name,
                   jp.quantity_used, jp.unit_price_at_time,
                   (jp.quantity_used * jp.unit_price_at_time) AS line_total,
                   jp.created_at
            FROM job_parts jp
            JOIN inventory i ON i.item_id = jp.item_id
            WHERE jp.job_id = $1
            ORDER BY jp.job_part_id
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(parts)
    }

    /// Total de repuestos del job a precio capturado. Solo lectura.
    pub async fn compute_total(&self, job_id: i32) -> AppResult<JobPartsTotal> {
        self.ensure_job_exists(job_id).await?;

        let mut conn = self.pool.acquire().await?;
        let parts = parts_for_job(&mut *conn, job_id).await?;

        Ok(JobPartsTotal {
            job_id,
            part_count: parts.len(),
            parts_total: parts_total(&parts),
        })
    }

    async fn ensure_job_exists(&self, job_id: i32) -> AppResult<()> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM service_jobs WHERE job_id = $1)")
                .bind(job_id)
                .fetch_one(&self.pool)
                .await?;

        if exists {
            Ok(())
        } else {
            Err(not_found_error("Service job", job_id))
        }
    }
}

pub(crate) async fn parts_for_job(conn: &mut PgConnection, job_id: i32) -> AppResult<Vec<JobPart>> {
    let parts = sqlx::query_as::<_, JobPart>(
        "SELECT * FROM job_parts WHERE job_id = $1 ORDER BY job_part_id",
    )
    .bind(job_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(parts)
}
