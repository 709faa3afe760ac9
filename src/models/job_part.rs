//! Modelo de JobPart
//!
//! Repuesto consumido por un job. `unit_price_at_time` se captura al adjuntar
//! y no cambia después: las facturas se calculan solo con ese precio, nunca
//! con el precio vivo del inventario.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// JobPart - mapea a la tabla job_parts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPart {
    pub job_part_id: i32,
    pub job_id: i32,
    pub item_id: i32,
    pub quantity_used: i32,
    pub unit_price_at_time: Decimal,
    pub created_at: DateTime<Utc>,
}

impl JobPart {
    pub fn line_total(&self) -> Decimal {
        Decimal::from(self.quantity_used) * self.unit_price_at_time
    }
}

/// JobPart con el nombre del repuesto, para listados
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPartDetail {
    pub job_part_id: i32,
    pub job_id: i32,
    pub item_id: i32,
    pub part_name: String,
    pub quantity_used: i32,
    pub unit_price_at_time: Decimal,
    pub line_total: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Suma de `quantity_used * unit_price_at_time`; cero sin repuestos
pub fn parts_total<'a, I>(parts: I) -> Decimal
where
    I: IntoIterator<Item = &'a JobPart>,
{
    parts.into_iter().map(JobPart::line_total).sum()
}

/// Request para adjuntar un repuesto a un job
#[derive(Debug, Deserialize, Validate)]
pub struct AttachPartRequest {
    #[validate(range(min = 1))]
    pub job_id: i32,

    #[validate(range(min = 1))]
    pub item_id: i32,

    #[validate(range(min = 1))]
    pub quantity_used: i32,
}

/// Total de repuestos de un job
#[derive(Debug, Clone, Serialize)]
pub struct JobPartsTotal {
    pub job_id: i32,
    pub part_count: usize,
    pub parts_total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(quantity_used: i32, unit_price_at_time: Decimal) -> JobPart {
        JobPart {
            job_part_id: 1,
            job_id: 1,
            item_id: 1,
            quantity_used,
            unit_price_at_time,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parts_total_empty_is_zero() {
        let parts: Vec<JobPart> = Vec::new();
        assert_eq!(parts_total(&parts), Decimal::ZERO);
    }

    #[test]
    fn test_parts_total_sums_captured_prices() {
        let parts = vec![
            part(2, Decimal::from(25)),
            part(3, Decimal::new(1050, 2)),
        ];
        // 2 * 25 + 3 * 10.50
        assert_eq!(parts_total(&parts), Decimal::new(8150, 2));
    }

    #[test]
    fn test_attach_requires_positive_quantity() {
        let request = AttachPartRequest { job_id: 1, item_id: 1, quantity_used: 0 };
        assert!(request.validate().is_err());

        let request = AttachPartRequest { job_id: 1, item_id: 1, quantity_used: 3 };
        assert!(request.validate().is_ok());
    }
}
