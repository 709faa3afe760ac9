use sqlx::PgPool;

use crate::models::employee::{Employee, UpdateEmployeeRequest, WorkingStatus};
use crate::utils::errors::{conflict_error, is_unique_violation, not_found_error, AppError, AppResult};

/// Datos para dar de alta un empleado; la contraseña ya viene hasheada
pub struct NewEmployee<'a> {
    pub name: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub position: &'a str,
    pub rating: f64,
}

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewEmployee<'_>) -> AppResult<Employee> {
        let username = new.username.trim().to_lowercase();

        sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (name, username, email, password_hash, position, working_status, rating, jobs_done)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 0)
            RETURNING *
            "#,
        )
        .bind(new.name.trim())
        .bind(&username)
        .bind(new.email.trim())
        .bind(new.password_hash)
        .bind(new.position.trim())
        .bind(WorkingStatus::Working)
        .bind(new.rating)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                conflict_error("Employee", "username or email", &username)
            } else {
                AppError::Database(e)
            }
        })
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    pub async fn get(&self, id: i32) -> AppResult<Employee> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Employee", id))
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Employee>> {
        let employee =
            sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE username = $1")
                .bind(username.trim().to_lowercase())
                .fetch_optional(&self.pool)
                .await?;

        Ok(employee)
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(employees)
    }

    pub async fn update(&self, id: i32, request: &UpdateEmployeeRequest) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            UPDATE employees
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                position = COALESCE($4, position),
                working_status = COALESCE($5, working_status),
                rating = COALESCE($6, rating)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.name.as_deref().map(str::trim))
        .bind(request.email.as_deref().map(str::trim))
        .bind(request.position.as_deref().map(str::trim))
        .bind(request.working_status)
        .bind(request.rating)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                conflict_error("Employee", "email", request.email.as_deref().unwrap_or_default())
            } else {
                AppError::Database(e)
            }
        })?
        .ok_or_else(|| not_found_error("Employee", id))
    }

    /// Baja lógica: el empleado queda `Inactive` y deja de poder autenticarse
    pub async fn deactivate(&self, id: i32) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET working_status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(WorkingStatus::Inactive)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Employee", id))
    }
}
