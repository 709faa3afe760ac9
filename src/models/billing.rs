//! Modelo de Billing
//!
//! Una factura por job (UNIQUE en `job_id`). `total_amount` siempre es
//! `labor_amount + parts_amount`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use validator::Validate;

use crate::utils::errors::AppResult;
use crate::utils::validation::{ensure_money_amount, validate_money_amount};

/// Estado de pago - mapea al ENUM payment_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// Billing - mapea a la tabla billing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Billing {
    pub bill_id: i32,
    pub job_id: i32,
    pub labor_amount: Decimal,
    pub parts_amount: Decimal,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub bill_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// Importes de una factura
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillAmounts {
    pub labor_amount: Decimal,
    pub parts_amount: Decimal,
    pub total_amount: Decimal,
}

impl BillAmounts {
    pub fn new(labor_amount: Decimal, parts_amount: Decimal) -> Self {
        Self {
            labor_amount,
            parts_amount,
            total_amount: labor_amount + parts_amount,
        }
    }

    /// Cada importe, total incluido, debe caber en `NUMERIC(12,2)`
    pub fn ensure_storable(&self) -> AppResult<()> {
        ensure_money_amount("labor_amount", self.labor_amount)?;
        ensure_money_amount("parts_amount", self.parts_amount)?;
        ensure_money_amount("total_amount", self.total_amount)
    }

    /// Corrección manual: los campos ausentes conservan su valor actual
    pub fn corrected(
        &self,
        labor_amount: Option<Decimal>,
        parts_amount: Option<Decimal>,
    ) -> Self {
        Self::new(
            labor_amount.unwrap_or(self.labor_amount),
            parts_amount.unwrap_or(self.parts_amount),
        )
    }
}

impl From<&Billing> for BillAmounts {
    fn from(bill: &Billing) -> Self {
        Self::new(bill.labor_amount, bill.parts_amount)
    }
}

/// Request para generar la factura de un job
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateBillRequest {
    #[validate(range(min = 1))]
    pub job_id: i32,
}

/// Request para corregir importes de una factura
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBillRequest {
    #[validate(custom = "validate_money_amount")]
    pub labor_amount: Option<Decimal>,

    #[validate(custom = "validate_money_amount")]
    pub parts_amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_amounts_total() {
        let amounts = BillAmounts::new(Decimal::from(100), Decimal::from(50));
        assert_eq!(amounts.total_amount, Decimal::from(150));
    }

    #[test]
    fn test_corrected_recomputes_total() {
        let amounts = BillAmounts::new(Decimal::from(100), Decimal::from(50));

        let corrected = amounts.corrected(Some(Decimal::from(80)), None);
        assert_eq!(corrected.labor_amount, Decimal::from(80));
        assert_eq!(corrected.parts_amount, Decimal::from(50));
        assert_eq!(corrected.total_amount, Decimal::from(130));

        let unchanged = amounts.corrected(None, None);
        assert_eq!(unchanged, amounts);
    }

    #[test]
    fn test_total_beyond_storable_range_is_rejected() {
        let max = crate::utils::validation::max_money_amount();

        assert!(BillAmounts::new(max, Decimal::ZERO).ensure_storable().is_ok());

        let err = BillAmounts::new(max, Decimal::ONE).ensure_storable().unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_update_bill_rejects_negative_amounts() {
        let request = UpdateBillRequest {
            labor_amount: Some(Decimal::new(-1, 0)),
            parts_amount: None,
        };
        assert!(request.validate().is_err());
    }
}
