//! Modelo de InventoryItem
//!
//! Repuestos en stock. `quantity_in_stock` nunca puede ser negativo; la
//! tabla lo garantiza también con un CHECK.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_money_amount, validate_not_blank};

/// InventoryItem - mapea a la tabla inventory
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InventoryItem {
    pub item_id: i32,
    pub part_name: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub quantity_in_stock: i32,
    pub reorder_level: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Stock bajo: cantidad igual o inferior al nivel de reposición
    pub fn is_low_stock(&self) -> bool {
        is_low_stock(self.quantity_in_stock, self.reorder_level)
    }
}

pub fn is_low_stock(quantity_in_stock: i32, reorder_level: i32) -> bool {
    quantity_in_stock <= reorder_level
}

/// Calcula la nueva cantidad tras aplicar `delta`, o falla si quedaría negativa.
pub fn apply_stock_delta(item_id: i32, current: i32, delta: i32) -> AppResult<i32> {
    match current.checked_add(delta) {
        Some(next) if next >= 0 => Ok(next),
        Some(_) => Err(AppError::InsufficientStock {
            item_id,
            available: current,
            requested: delta.saturating_neg(),
        }),
        None => Err(AppError::Internal(format!(
            "stock overflow for item {}",
            item_id
        ))),
    }
}

/// Request para crear un repuesto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub part_name: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(custom = "validate_money_amount")]
    pub unit_price: Decimal,

    #[validate(range(min = 0))]
    pub quantity_in_stock: i32,

    #[validate(range(min = 0))]
    pub reorder_level: i32,
}

/// Request para actualizar un repuesto existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInventoryItemRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub part_name: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(custom = "validate_money_amount")]
    pub unit_price: Option<Decimal>,

    #[validate(range(min = 0))]
    pub quantity_in_stock: Option<i32>,

    #[validate(range(min = 0))]
    pub reorder_level: Option<i32>,
}

/// Ajuste de stock con signo (+ reposición, - consumo o merma)
#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SetReorderLevelRequest {
    #[validate(range(min = 0))]
    pub reorder_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_stock_delta() {
        assert_eq!(apply_stock_delta(1, 5, -3).unwrap(), 2);
        assert_eq!(apply_stock_delta(1, 5, -5).unwrap(), 0);
        assert_eq!(apply_stock_delta(1, 5, 10).unwrap(), 15);
    }

    #[test]
    fn test_apply_stock_delta_rejects_negative_result() {
        match apply_stock_delta(7, 5, -10) {
            Err(AppError::InsufficientStock { item_id, available, requested }) => {
                assert_eq!(item_id, 7);
                assert_eq!(available, 5);
                assert_eq!(requested, 10);
            }
            other => panic!("expected InsufficientStock, got {:?}", other),
        }
    }

    #[test]
    fn test_low_stock_boundary() {
        assert!(is_low_stock(2, 2));
        assert!(is_low_stock(0, 0));
        assert!(!is_low_stock(3, 2));
    }

    #[test]
    fn test_create_item_validation() {
        let request = CreateInventoryItemRequest {
            part_name: "  ".into(),
            description: None,
            unit_price: Decimal::new(-1, 0),
            quantity_in_stock: -1,
            reorder_level: -2,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("part_name"));
        assert!(fields.contains_key("unit_price"));
        assert!(fields.contains_key("quantity_in_stock"));
        assert!(fields.contains_key("reorder_level"));
    }
}
