use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::employee::Employee;
use crate::models::service_job::{JobStatus, ServiceJob, Transition};
use crate::models::service_request::RequestStatus;
use crate::utils::errors::{is_unique_violation, not_found_error, AppError, AppResult};
use crate::utils::validation::ensure_money_amount;

pub struct ServiceJobRepository {
    pool: PgPool,
}

impl ServiceJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Abre un job `Unassigned` sobre el pedido. Un pedido solo puede tener un
    /// job activo a la vez.
    pub async fn create(&self, request_id: i32) -> AppResult<ServiceJob> {
        let mut tx = self.pool.begin().await?;

        let request_status = sqlx::query_scalar::<_, RequestStatus>(
            "SELECT status FROM service_requests WHERE request_id = $1 FOR UPDATE",
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| not_found_error("Service request", request_id))?;

        if request_status == RequestStatus::Cancelled {
            return Err(AppError::InvalidTransition(format!(
                "service request {} is cancelled",
                request_id
            )));
        }

        let active_job = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT job_id FROM service_jobs
            WHERE request_id = $1 AND job_status NOT IN ('Completed', 'Cancelled')
            LIMIT 1
            "#,
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(job_id) = active_job {
            return Err(AppError::InvalidTransition(format!(
                "service request {} already has active job {}",
                request_id, job_id
            )));
        }

        let job = sqlx::query_as::<_, ServiceJob>(
            r#"
            INSERT INTO service_jobs (request_id, job_status, labor_charge, start_time)
            VALUES ($1, 'Unassigned', 0, $2)
            RETURNING *
            "#,
        )
        .bind(request_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::InvalidTransition(format!(
                    "service request {} already has an active job",
                    request_id
                ))
            } else {
                AppError::Database(e)
            }
        })?;

        tx.commit().await?;
        Ok(job)
    }

    pub async fn find_by_id(&self, job_id: i32) -> AppResult<Option<ServiceJob>> {
        let job = sqlx::query_as::<_, ServiceJob>("SELECT * FROM service_jobs WHERE job_id = $1")
            .bind(job_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(job)
    }

    pub async fn get(&self, job_id: i32) -> AppResult<ServiceJob> {
        self.find_by_id(job_id)
            .await?
            .ok_or_else(|| not_found_error("Service job", job_id))
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceJob>> {
        let jobs = sqlx::query_as::<_, ServiceJob>(
            "SELECT * FROM service_jobs ORDER BY start_time DESC, job_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Asigna (o reasigna) un empleado `Working`; el job pasa a `Assigned`.
    pub async fn assign(&self, job_id: i32, employee_id: i32) -> AppResult<ServiceJob> {
        let mut tx = self.pool.begin().await?;

        let job = lock_job(&mut *tx, job_id).await?;
        if !job.job_status.accepts_assignment() {
            return Err(AppError::InvalidTransition(format!(
                "cannot assign job {} in status {}",
                job_id,
                job.job_status.as_str()
            )));
        }

        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(employee_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Employee", employee_id))?;

        if !employee.is_working() {
            return Err(AppError::EmployeeUnavailable(format!(
                "employee {} is not working",
                employee_id
            )));
        }

        let job = sqlx::query_as::<_, ServiceJob>(
            r#"
            UPDATE service_jobs
            SET assigned_employee_id = $2, job_status = $3
            WHERE job_id = $1
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(employee_id)
        .bind(JobStatus::Assigned)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(job)
    }

    /// Avanza el estado del job. Al completar incrementa `jobs_done` del
    /// empleado una sola vez y propaga el estado al pedido dueño.
    pub async fn update_status(&self, job_id: i32, next: JobStatus) -> AppResult<ServiceJob> {
        let mut tx = self.pool.begin().await?;

        let job = lock_job(&mut *tx, job_id).await?;
        if job.job_status.transition_to(next)? == Transition::Unchanged {
            tx.rollback().await?;
            return Ok(job);
        }

        if next == JobStatus::Assigned && job.assigned_employee_id.is_none() {
            return Err(AppError::InvalidTransition(format!(
                "job {} has no assigned employee",
                job_id
            )));
        }

        let end_time = if next == JobStatus::Completed {
            Some(Utc::now())
        } else {
            job.end_time
        };

        let updated = sqlx::query_as::<_, ServiceJob>(
            r#"
            UPDATE service_jobs
            SET job_status = $2, end_time = $3
            WHERE job_id = $1
            RETURNING *
            "#,
        )
        .bind(job_id)
        .bind(next)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await?;

        if next == JobStatus::Completed {
            if let Some(employee_id) = job.assigned_employee_id {
                sqlx::query("UPDATE employees SET jobs_done = jobs_done + 1 WHERE id = $1")
                    .bind(employee_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        if let Some(request_status) = next.propagated_request_status() {
            sqlx::query("UPDATE service_requests SET status = $2 WHERE request_id = $1")
                .bind(job.request_id)
                .bind(request_status)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// La mano de obra queda congelada una vez generada la factura.
    pub async fn update_labor_charge(&self, job_id: i32, amount: Decimal) -> AppResult<ServiceJob> {
        ensure_money_amount("labor_charge", amount)?;

        let mut tx = self.pool.begin().await?;

        lock_job(&mut *tx, job_id).await?;
        ensure_unbilled(&mut *tx, job_id).await?;

        let job = sqlx::query_as::<_, ServiceJob>(
            "UPDATE service_jobs SET labor_charge = $2 WHERE job_id = $1 RETURNING *",
        )
        .bind(job_id)
        .bind(amount)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(job)
    }
}

/// Bloquea la fila del job hasta el fin de la transacción. Todas las
/// mutaciones de un job (repuestos, mano de obra, estado, factura) pasan por
/// aquí, así quedan serializadas por job.
pub(crate) async fn lock_job(conn: &mut PgConnection, job_id: i32) -> AppResult<ServiceJob> {
    sqlx::query_as::<_, ServiceJob>("SELECT * FROM service_jobs WHERE job_id = $1 FOR UPDATE")
        .bind(job_id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| not_found_error("Service job", job_id))
}

pub(crate) async fn ensure_unbilled(conn: &mut PgConnection, job_id: i32) -> AppResult<()> {
    let bill_id = sqlx::query_scalar::<_, i32>("SELECT bill_id FROM billing WHERE job_id = $1")
        .bind(job_id)
        .fetch_optional(&mut *conn)
        .await?;

    match bill_id {
        Some(bill_id) => Err(AppError::JobAlreadyBilled(format!(
            "job {} is frozen by bill {}",
            job_id, bill_id
        ))),
        None => Ok(()),
    }
}
