//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.
//! Cada vehículo pertenece a exactamente un cliente (`customer_id`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::validation::PLATE_NUMBER_RE;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub plate_no: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(range(min = 1))]
    pub customer_id: i32,

    #[validate(regex = "PLATE_NUMBER_RE")]
    pub plate_no: String,

    #[validate(length(min = 1, max = 50))]
    pub brand: String,

    #[validate(length(min = 1, max = 50))]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
}

/// Request para corregir metadatos de un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(regex = "PLATE_NUMBER_RE")]
    pub plate_no: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,

    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_vehicle_validation() {
        let request = CreateVehicleRequest {
            customer_id: 1,
            plate_no: "KA-01-AB-1234".into(),
            brand: "Toyota".into(),
            model: "Corolla".into(),
            year: Some(2018),
        };
        assert!(request.validate().is_ok());

        let request = CreateVehicleRequest {
            customer_id: 0,
            plate_no: "?".into(),
            brand: String::new(),
            model: "Corolla".into(),
            year: Some(1800),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("customer_id"));
        assert!(fields.contains_key("plate_no"));
        assert!(fields.contains_key("brand"));
        assert!(fields.contains_key("year"));
    }
}
