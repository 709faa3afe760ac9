//! Modelos del Dashboard
//!
//! Este módulo contiene las estadísticas agregadas y las proyecciones de
//! lectura (filas con campos de visualización obtenidos por JOIN).

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::billing::PaymentStatus;
use crate::models::employee::Employee;
use crate::models::service_job::JobStatus;
use crate::models::service_request::RequestStatus;

/// Cantidad de empleados en el ranking del dashboard
pub const TOP_EMPLOYEES_LIMIT: usize = 3;

/// Resumen para dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub customers_count: i64,
    pub vehicles_count: i64,
    pub pending_requests: i64,
    pub active_jobs: i64,
    pub low_stock_items: i64,
    pub unpaid_total: Decimal,
    pub total_revenue: Decimal,
    pub top_employees: Vec<TopEmployee>,
}

/// Empleado en el ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopEmployee {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub rating: f64,
    pub jobs_done: i32,
}

impl From<&Employee> for TopEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            position: employee.position.clone(),
            rating: employee.rating,
            jobs_done: employee.jobs_done,
        }
    }
}

/// Ranking: solo empleados `Working`, por rating descendente y, a igual
/// rating, por `jobs_done` descendente.
pub fn rank_top_employees(employees: &[Employee], limit: usize) -> Vec<TopEmployee> {
    let mut ranked: Vec<TopEmployee> = employees
        .iter()
        .filter(|e| e.is_working())
        .map(TopEmployee::from)
        .collect();

    ranked.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.jobs_done.cmp(&a.jobs_done))
    });
    ranked.truncate(limit);
    ranked
}

/// Vehículo con datos del cliente
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VehicleOverview {
    pub vehicle_id: i32,
    pub customer_id: i32,
    pub plate_no: String,
    pub brand: String,
    pub model: String,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
}

/// Pedido con datos del vehículo y cliente
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceRequestOverview {
    pub request_id: i32,
    pub vehicle_id: i32,
    pub service_type: String,
    pub description: Option<String>,
    pub status: RequestStatus,
    pub request_date: DateTime<Utc>,
    pub plate_no: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub customer_name: Option<String>,
}

/// Job con datos del pedido y vehículo
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ServiceJobOverview {
    pub job_id: i32,
    pub request_id: i32,
    pub assigned_employee_id: Option<i32>,
    pub job_status: JobStatus,
    pub labor_charge: Decimal,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub service_type: Option<String>,
    pub request_status: Option<RequestStatus>,
    pub plate_no: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
}

/// Factura con datos del job, vehículo y cliente
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BillingOverview {
    pub bill_id: i32,
    pub job_id: i32,
    pub labor_amount: Decimal,
    pub parts_amount: Decimal,
    pub total_amount: Decimal,
    pub payment_status: PaymentStatus,
    pub bill_date: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
    pub job_status: Option<JobStatus>,
    pub service_type: Option<String>,
    pub plate_no: Option<String>,
    pub customer_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::WorkingStatus;

    fn employee(id: i32, rating: f64, jobs_done: i32, working_status: WorkingStatus) -> Employee {
        Employee {
            id,
            name: format!("Employee {}", id),
            username: format!("emp{}", id),
            email: format!("emp{}@example.com", id),
            password_hash: String::new(),
            position: "Mechanic".into(),
            working_status,
            rating,
            jobs_done,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_rating_tie_broken_by_jobs_done() {
        let employees = vec![
            employee(1, 4.8, 10, WorkingStatus::Working),
            employee(2, 4.8, 15, WorkingStatus::Working),
        ];

        let ranked = rank_top_employees(&employees, TOP_EMPLOYEES_LIMIT);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, 2);
        assert_eq!(ranked[1].id, 1);
    }

    #[test]
    fn test_inactive_employees_are_excluded_and_limit_applies() {
        let employees = vec![
            employee(1, 5.0, 1, WorkingStatus::Inactive),
            employee(2, 3.0, 8, WorkingStatus::Working),
            employee(3, 4.1, 2, WorkingStatus::Working),
            employee(4, 4.9, 0, WorkingStatus::Working),
            employee(5, 2.5, 40, WorkingStatus::Working),
        ];

        let ranked = rank_top_employees(&employees, TOP_EMPLOYEES_LIMIT);
        let ids: Vec<i32> = ranked.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 3, 2]);
    }

    #[test]
    fn test_default_stats_are_zeroed() {
        let stats = DashboardStats::default();
        assert_eq!(stats.customers_count, 0);
        assert_eq!(stats.unpaid_total, Decimal::ZERO);
        assert_eq!(stats.total_revenue, Decimal::ZERO);
        assert!(stats.top_employees.is_empty());
    }
}
