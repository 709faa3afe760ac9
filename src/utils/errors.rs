//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas. Cada variante tiene un
//! código estable (`code()`) que el frontend usa para distinguir fallos.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock for item {item_id}: {available} available, {requested} requested")]
    InsufficientStock {
        item_id: i32,
        available: i32,
        requested: i32,
    },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Employee unavailable: {0}")]
    EmployeeUnavailable(String),

    #[error("Job not complete: {0}")]
    JobNotComplete(String),

    #[error("Duplicate bill: {0}")]
    DuplicateBill(String),

    #[error("Job already billed: {0}")]
    JobAlreadyBilled(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    /// Código estable del tipo de error
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DB_ERROR",
            AppError::Validation(_) | AppError::MalformedInput(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InsufficientStock { .. } => "INSUFFICIENT_STOCK",
            AppError::InvalidTransition(_) => "INVALID_TRANSITION",
            AppError::EmployeeUnavailable(_) => "EMPLOYEE_UNAVAILABLE",
            AppError::JobNotComplete(_) => "JOB_NOT_COMPLETE",
            AppError::DuplicateBill(_) => "DUPLICATE_BILL",
            AppError::JobAlreadyBilled(_) => "JOB_ALREADY_BILLED",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InsufficientStock { .. }
            | AppError::InvalidTransition(_)
            | AppError::EmployeeUnavailable(_)
            | AppError::JobNotComplete(_)
            | AppError::DuplicateBill(_)
            | AppError::JobAlreadyBilled(_)
            | AppError::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            AppError::Database(_) => "Database Error",
            AppError::Validation(_) | AppError::MalformedInput(_) => "Validation Error",
            AppError::NotFound(_) => "Not Found",
            AppError::InsufficientStock { .. } => "Insufficient Stock",
            AppError::InvalidTransition(_) => "Invalid Transition",
            AppError::EmployeeUnavailable(_) => "Employee Unavailable",
            AppError::JobNotComplete(_) => "Job Not Complete",
            AppError::DuplicateBill(_) => "Duplicate Bill",
            AppError::JobAlreadyBilled(_) => "Job Already Billed",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::Conflict(_) => "Conflict",
            AppError::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        if status.is_server_error() {
            error!("❌ {}: {}", code, self);
        } else {
            warn!("⚠️ {}: {}", code, self);
        }

        let (message, details) = match &self {
            AppError::Database(e) => (
                "An error occurred while accessing the database".to_string(),
                Some(json!({ "sql_error": e.to_string() })),
            ),
            AppError::Validation(e) => (
                "The provided data is invalid".to_string(),
                Some(json!(e)),
            ),
            AppError::InsufficientStock {
                item_id,
                available,
                requested,
            } => (
                self.to_string(),
                Some(json!({
                    "item_id": item_id,
                    "available": available,
                    "requested": requested,
                })),
            ),
            AppError::MalformedInput(msg) => (
                "The request could not be parsed".to_string(),
                Some(json!({ "reason": msg })),
            ),
            AppError::Internal(msg) => (
                "An unexpected error occurred".to_string(),
                Some(json!({ "internal_error": msg })),
            ),
            AppError::NotFound(msg)
            | AppError::InvalidTransition(msg)
            | AppError::EmployeeUnavailable(msg)
            | AppError::JobNotComplete(msg)
            | AppError::DuplicateBill(msg)
            | AppError::JobAlreadyBilled(msg)
            | AppError::Unauthorized(msg)
            | AppError::Conflict(msg) => (msg.clone(), None),
        };

        let body = ErrorResponse {
            error: self.title().to_string(),
            message,
            details,
            code: Some(code.to_string()),
        };

        (status, Json(body)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de conflicto
pub fn conflict_error(resource: &str, field: &str, value: &str) -> AppError {
    AppError::Conflict(format!("{} with {} '{}' already exists", resource, field, value))
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}

/// Detecta violaciones de unicidad de Postgres (código 23505)
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_map_to_conflict() {
        let errors = vec![
            AppError::InsufficientStock { item_id: 1, available: 5, requested: 10 },
            AppError::InvalidTransition("Unassigned -> Completed".into()),
            AppError::EmployeeUnavailable("inactive".into()),
            AppError::JobNotComplete("job 1".into()),
            AppError::DuplicateBill("job 1".into()),
            AppError::JobAlreadyBilled("job 1".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::CONFLICT, "{}", err.code());
        }
    }

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(not_found_error("Job", 7).code(), "NOT_FOUND");
        assert_eq!(validation_error("quantity", "must be positive").code(), "VALIDATION_ERROR");
        assert_eq!(AppError::Unauthorized("no token".into()).code(), "UNAUTHORIZED");
        assert_eq!(AppError::DuplicateBill("x".into()).code(), "DUPLICATE_BILL");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(not_found_error("Bill", 3).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(validation_error("amount", "negative").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Unauthorized("expired".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            internal_error("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_insufficient_stock_message() {
        let err = AppError::InsufficientStock { item_id: 4, available: 5, requested: 10 };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for item 4: 5 available, 10 requested"
        );
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let response = AppError::JobAlreadyBilled("job 9 has bill 2".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], "JOB_ALREADY_BILLED");
        assert_eq!(body["message"], "job 9 has bill 2");
        assert!(body.get("details").is_none());
    }
}
