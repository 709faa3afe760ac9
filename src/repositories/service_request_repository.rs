use sqlx::PgPool;

use crate::models::service_request::{CreateServiceRequestRequest, RequestStatus, ServiceRequest};
use crate::utils::errors::{not_found_error, AppResult};

pub struct ServiceRequestRepository {
    pool: PgPool,
}

impl ServiceRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Abre un pedido `Pending` para un vehículo existente
    pub async fn create(&self, request: &CreateServiceRequestRequest) -> AppResult<ServiceRequest> {
        let vehicle_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vehicles WHERE vehicle_id = $1)")
                .bind(request.vehicle_id)
                .fetch_one(&self.pool)
                .await?;
        if !vehicle_exists {
            return Err(not_found_error("Vehicle", request.vehicle_id));
        }

        let service_request = sqlx::query_as::<_, ServiceRequest>(
            r#"
            INSERT INTO service_requests (vehicle_id, service_type, description, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.vehicle_id)
        .bind(request.service_type.trim())
        .bind(&request.description)
        .bind(RequestStatus::Pending)
        .fetch_one(&self.pool)
        .await?;

        Ok(service_request)
    }

    pub async fn find_by_id(&self, request_id: i32) -> AppResult<Option<ServiceRequest>> {
        let service_request = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests WHERE request_id = $1",
        )
        .bind(request_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(service_request)
    }

    pub async fn get(&self, request_id: i32) -> AppResult<ServiceRequest> {
        self.find_by_id(request_id)
            .await?
            .ok_or_else(|| not_found_error("Service request", request_id))
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceRequest>> {
        let requests = sqlx::query_as::<_, ServiceRequest>(
            "SELECT * FROM service_requests ORDER BY request_date DESC, request_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Cambio manual de estado del pedido (p. ej. cancelar desde recepción)
    pub async fn update_status(
        &self,
        request_id: i32,
        status: RequestStatus,
    ) -> AppResult<ServiceRequest> {
        sqlx::query_as::<_, ServiceRequest>(
            "UPDATE service_requests SET status = $2 WHERE request_id = $1 RETURNING *",
        )
        .bind(request_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Service request", request_id))
    }
}
