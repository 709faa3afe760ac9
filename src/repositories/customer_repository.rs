use sqlx::PgPool;

use crate::models::customer::{CreateCustomerRequest, Customer, UpdateCustomerRequest};
use crate::utils::errors::{not_found_error, AppResult};

pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateCustomerRequest) -> AppResult<Customer> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customers (name, phone, email, address)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.name.trim())
        .bind(request.phone.trim())
        .bind(&request.email)
        .bind(&request.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(customer)
    }

    pub async fn find_by_id(&self, customer_id: i32) -> AppResult<Option<Customer>> {
        let customer =
            sqlx::query_as::<_, Customer>("SELECT * FROM customers WHERE customer_id = $1")
                .bind(customer_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(customer)
    }

    pub async fn get(&self, customer_id: i32) -> AppResult<Customer> {
        self.find_by_id(customer_id)
            .await?
            .ok_or_else(|| not_found_error("Customer", customer_id))
    }

    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT * FROM customers ORDER BY created_at DESC, customer_id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    pub async fn update(
        &self,
        customer_id: i32,
        request: &UpdateCustomerRequest,
    ) -> AppResult<Customer> {
        sqlx::query_as::<_, Customer>(
            r#"
            UPDATE customers
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                email = COALESCE($4, email),
                address = COALESCE($5, address)
            WHERE customer_id = $1
            RETURNING *
            "#,
        )
        .bind(customer_id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.phone.as_deref().map(str::trim))
        .bind(&request.email)
        .bind(&request.address)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Customer", customer_id))
    }
}
