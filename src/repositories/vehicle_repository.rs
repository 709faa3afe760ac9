use sqlx::PgPool;

use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::utils::errors::{conflict_error, is_unique_violation, not_found_error, AppError, AppResult};
use crate::utils::validation::normalize_plate;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registra un vehículo de un cliente existente. La matrícula es única.
    pub async fn create(&self, request: &CreateVehicleRequest) -> AppResult<Vehicle> {
        let customer_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM customers WHERE customer_id = $1)")
                .bind(request.customer_id)
                .fetch_one(&self.pool)
                .await?;
        if !customer_exists {
            return Err(not_found_error("Customer", request.customer_id));
        }

        let plate_no = normalize_plate(&request.plate_no);

        sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (customer_id, plate_no, brand, model, year)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.customer_id)
        .bind(&plate_no)
        .bind(request.brand.trim())
        .bind(request.model.trim())
        .bind(request.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| plate_conflict(e, &plate_no))
    }

    pub async fn find_by_id(&self, vehicle_id: i32) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE vehicle_id = $1")
            .bind(vehicle_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn get(&self, vehicle_id: i32) -> AppResult<Vehicle> {
        self.find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY vehicle_id DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn list_by_customer(&self, customer_id: i32) -> AppResult<Vec<Vehicle>> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT * FROM vehicles WHERE customer_id = $1 ORDER BY vehicle_id DESC",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn update(&self, vehicle_id: i32, request: &UpdateVehicleRequest) -> AppResult<Vehicle> {
        let plate_no = request.plate_no.as_deref().map(normalize_plate);

        sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET plate_no = COALESCE($2, plate_no),
                brand = COALESCE($3, brand),
                model = COALESCE($4, model),
                year = COALESCE($5, year)
            WHERE vehicle_id = $1
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(&plate_no)
        .bind(request.brand.as_deref().map(str::trim))
        .bind(request.model.as_deref().map(str::trim))
        .bind(request.year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| plate_conflict(e, plate_no.as_deref().unwrap_or_default()))?
        .ok_or_else(|| not_found_error("Vehicle", vehicle_id))
    }
}

fn plate_conflict(err: sqlx::Error, plate_no: &str) -> AppError {
    if is_unique_violation(&err) {
        conflict_error("Vehicle", "plate_no", plate_no)
    } else {
        AppError::Database(err)
    }
}
