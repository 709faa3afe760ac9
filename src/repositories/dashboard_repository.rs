use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::customer::Customer;
use crate::models::dashboard::{
    rank_top_employees, BillingOverview, DashboardStats, ServiceJobOverview,
    ServiceRequestOverview, VehicleOverview, TOP_EMPLOYEES_LIMIT,
};
use crate::models::employee::Employee;
use crate::models::inventory::InventoryItem;
use crate::utils::errors::AppResult;

/// Lecturas del dashboard: sin efectos secundarios ni bloqueos.
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let customers_count = self.count("SELECT COUNT(*) FROM customers").await?;
        let vehicles_count = self.count("SELECT COUNT(*) FROM vehicles").await?;
        let pending_requests = self
            .count("SELECT COUNT(*) FROM service_requests WHERE status = 'Pending'")
            .await?;
        let active_jobs = self
            .count("SELECT COUNT(*) FROM service_requests WHERE status IN ('Pending', 'In_Progress')")
            .await?;
        let low_stock_items = self
            .count("SELECT COUNT(*) FROM inventory WHERE quantity_in_stock <= reorder_level")
            .await?;

        let unpaid_total = self
            .sum("SELECT COALESCE(SUM(total_amount), 0) FROM billing WHERE payment_status = 'Unpaid'")
            .await?;
        let total_revenue = self
            .sum("SELECT COALESCE(SUM(total_amount), 0) FROM billing WHERE payment_status = 'Paid'")
            .await?;

        let working = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE working_status = 'Working'",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardStats {
            customers_count,
            vehicles_count,
            pending_requests,
            active_jobs,
            low_stock_items,
            unpaid_total,
            total_revenue,
            top_employees: rank_top_employees(&working, TOP_EMPLOYEES_LIMIT),
        })
    }

    pub async fn customers(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers ORDER BY created_at DESC, customer_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn vehicles(&self) -> AppResult<Vec<VehicleOverview>> {
        let vehicles = sqlx::query_as::<_, VehicleOverview>(
            r#"
            SELECT v.*, c.name AS customer_name, c.phone AS customer_phone
            FROM vehicles v
            LEFT JOIN customers c ON v.customer_id = c.customer_id
            ORDER BY v.vehicle_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn service_requests(&self) -> AppResult<Vec<ServiceRequestOverview>> {
        let requests = sqlx::query_as::<_, ServiceRequestOverview>(
            r#"
            SELECT sr.*, v.plate_no, v.brand, v.model, c.name AS customer_name
            FROM service_requests sr
            LEFT JOIN vehicles v ON sr.vehicle_id = v.vehicle_id
            LEFT JOIN customers c ON v.customer_id = c.customer_id
            ORDER BY sr.request_date DESC, sr.request_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    pub async fn service_jobs(&self) -> AppResult<Vec<ServiceJobOverview>> {
        let jobs = sqlx::query_as::<_, ServiceJobOverview>(
            r#"
            SELECT sj.*, sr.service_type, sr.status AS request_status,
                   v.plate_no, v.brand, v.model
            FROM service_jobs sj
            LEFT JOIN service_requests sr ON sj.request_id = sr.request_id
            LEFT JOIN vehicles v ON sr.vehicle_id = v.vehicle_id
            ORDER BY sj.start_time DESC, sj.job_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    pub async fn inventory(&self) -> AppResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT * FROM inventory ORDER BY part_name, item_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn billing(&self) -> AppResult<Vec<BillingOverview>> {
        let bills = sqlx::query_as::<_, BillingOverview>(
            r#"
            SELECT b.*, sj.job_status, sr.service_type,
                   v.plate_no, c.name AS customer_name
            FROM billing b
            LEFT JOIN service_jobs sj ON b.job_id = sj.job_id
            LEFT JOIN service_requests sr ON sj.request_id = sr.request_id
            LEFT JOIN vehicles v ON sr.vehicle_id = v.vehicle_id
            LEFT JOIN customers c ON v.customer_id = c.customer_id
            ORDER BY b.bill_date DESC, b.bill_id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bills)
    }

    async fn count(&self, sql: &'static str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    async fn sum(&self, sql: &'static str) -> AppResult<Decimal> {
        let total: Option<Decimal> = sqlx::query_scalar(sql).fetch_one(&self.pool).await?;
        Ok(total.unwrap_or(Decimal::ZERO))
    }
}
