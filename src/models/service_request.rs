//! Modelo de ServiceRequest
//!
//! Pedido de trabajo de un cliente sobre un vehículo, previo a abrir un job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;

/// Estado del pedido - mapea al ENUM request_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "request_status")]
pub enum RequestStatus {
    Pending,
    #[sqlx(rename = "In_Progress")]
    #[serde(rename = "In_Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In_Progress",
            RequestStatus::Completed => "Completed",
            RequestStatus::Cancelled => "Cancelled",
        }
    }

    /// Pending o In_Progress cuentan como "activos" en el dashboard
    pub fn is_active(&self) -> bool {
        matches!(self, RequestStatus::Pending | RequestStatus::InProgress)
    }
}

/// ServiceRequest - mapea a la tabla service_requests
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRequest {
    pub request_id: i32,
    pub vehicle_id: i32,
    pub service_type: String,
    pub description: Option<String>,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
}

/// Request para registrar un pedido de servicio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRequestRequest {
    #[validate(range(min = 1))]
    pub vehicle_id: i32,

    #[validate(length(min = 2, max = 100))]
    pub service_type: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Request para cambiar el estado de un pedido manualmente
#[derive(Debug, Deserialize)]
pub struct UpdateServiceRequestStatusRequest {
    pub status: RequestStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_status_serde_uses_underscore_name() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"In_Progress\"");

        let parsed: RequestStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(parsed, RequestStatus::Cancelled);
        assert!(serde_json::from_str::<RequestStatus>("\"Done\"").is_err());
    }

    #[test]
    fn test_active_statuses() {
        assert!(RequestStatus::Pending.is_active());
        assert!(RequestStatus::InProgress.is_active());
        assert!(!RequestStatus::Completed.is_active());
        assert!(!RequestStatus::Cancelled.is_active());
    }
}
