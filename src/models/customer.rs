//! Modelo de Customer
//!
//! Clientes del taller. Nunca se borran: el historial de servicio los referencia.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::PHONE_RE;

/// Customer - mapea a la tabla customers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(regex = "PHONE_RE")]
    pub phone: String,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,
}

/// Request para corregir datos de un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(regex = "PHONE_RE")]
    pub phone: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 255))]
    pub address: Option<String>,
}
