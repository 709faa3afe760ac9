use sqlx::PgPool;
use tracing::info;
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let vehicle = self.repository.create(&request).await?;
        info!("🚗 Vehículo registrado: {} (cliente {})", vehicle.plate_no, vehicle.customer_id);

        Ok(ApiResponse::success_with_message(vehicle, "Vehicle created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<Vehicle>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self, customer_id: Option<i32>) -> Result<ApiResponse<Vec<Vehicle>>, AppError> {
        let vehicles = match customer_id {
            Some(customer_id) => self.repository.list_by_customer(customer_id).await?,
            None => self.repository.list().await?,
        };

        Ok(ApiResponse::success(vehicles))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<Vehicle>, AppError> {
        request.validate()?;

        let vehicle = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(vehicle, "Vehicle updated"))
    }
}
