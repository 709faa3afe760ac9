//! Modelo de Employee
//!
//! Empleados del taller. También son los usuarios que se autentican.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;

/// Estado laboral - mapea al ENUM working_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "working_status")]
pub enum WorkingStatus {
    Working,
    Inactive,
}

/// Employee - mapea a la tabla employees
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub position: String,
    pub working_status: WorkingStatus,
    pub rating: f64,
    pub jobs_done: i32,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn is_working(&self) -> bool {
        self.working_status == WorkingStatus::Working
    }
}

/// Request para dar de alta un empleado
#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 100))]
    pub password: String,

    #[validate(length(min = 2, max = 50))]
    pub position: String,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

/// Request para actualizar un empleado existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub position: Option<String>,

    pub working_status: Option<WorkingStatus>,

    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}
