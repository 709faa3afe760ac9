//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los `#[derive(Validate)]` de los requests.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use crate::utils::errors::{validation_error, AppResult};

lazy_static! {
    /// Matrícula: letras, dígitos, espacios y guiones (p.ej. "KA-01-AB-1234")
    pub static ref PLATE_NUMBER_RE: Regex =
        Regex::new(r"^(?i)[A-Z0-9][A-Z0-9 -]{1,14}[A-Z0-9]$").unwrap();

    /// Teléfono con prefijo internacional opcional
    pub static ref PHONE_RE: Regex = Regex::new(r"^\+?[0-9][0-9 ()-]{6,19}$").unwrap();
}

/// Mayor importe que cabe en una columna `NUMERIC(12,2)`
pub fn max_money_amount() -> Decimal {
    Decimal::new(999_999_999_999, 2)
}

/// Validar un importe monetario: no negativo y almacenable
pub fn validate_money_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    if *value > max_money_amount() {
        let mut error = ValidationError::new("max_amount");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Igual que `validate_money_amount`, como `AppError` para los repositorios
pub fn ensure_money_amount(field: &'static str, value: Decimal) -> AppResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(validation_error(field, "must not be negative"));
    }
    if value > max_money_amount() {
        return Err(validation_error(field, "exceeds the maximum storable amount"));
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar matrícula: mayúsculas y sin espacios sobrantes
pub fn normalize_plate(value: &str) -> String {
    value.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_money_amount() {
        assert!(validate_money_amount(&Decimal::new(15000, 2)).is_ok());
        assert!(validate_money_amount(&Decimal::ZERO).is_ok());
        assert!(validate_money_amount(&max_money_amount()).is_ok());
        assert!(validate_money_amount(&Decimal::new(-1, 2)).is_err());
        assert!(validate_money_amount(&Decimal::new(10_000_000_000, 0)).is_err());
    }

    #[test]
    fn test_ensure_money_amount() {
        assert!(ensure_money_amount("labor_charge", Decimal::from(100)).is_ok());

        let err = ensure_money_amount("total_amount", max_money_amount() + Decimal::ONE).unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(ensure_money_amount("labor_charge", Decimal::NEGATIVE_ONE).is_err());
    }

    #[test]
    fn test_plate_number_regex() {
        assert!(PLATE_NUMBER_RE.is_match("KA-01-AB-1234"));
        assert!(PLATE_NUMBER_RE.is_match("abc 123"));
        assert!(!PLATE_NUMBER_RE.is_match("A"));
        assert!(!PLATE_NUMBER_RE.is_match("-AB123"));
    }

    #[test]
    fn test_phone_regex() {
        assert!(PHONE_RE.is_match("+91 98765 43210"));
        assert!(PHONE_RE.is_match("555-0100"));
        assert!(!PHONE_RE.is_match("12"));
        assert!(!PHONE_RE.is_match("call me"));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Brake pads").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("  ka-01-ab-1234 "), "KA-01-AB-1234");
    }
}
