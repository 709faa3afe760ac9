use sqlx::PgPool;
use tracing::{info, warn};
use validator::Validate;

use crate::dto::api_response::ApiResponse;
use crate::models::inventory::{
    AdjustStockRequest, CreateInventoryItemRequest, InventoryItem, SetReorderLevelRequest,
    UpdateInventoryItemRequest,
};
use crate::repositories::inventory_repository::InventoryRepository;
use crate::utils::errors::AppError;

pub struct InventoryController {
    repository: InventoryRepository,
}

impl InventoryController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InventoryRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;

        let item = self.repository.create(&request).await?;
        info!("📦 Repuesto {} creado: {}", item.item_id, item.part_name);

        Ok(ApiResponse::success_with_message(item, "Inventory item created"))
    }

    pub async fn get(&self, id: i32) -> Result<ApiResponse<InventoryItem>, AppError> {
        Ok(ApiResponse::success(self.repository.get(id).await?))
    }

    pub async fn list(&self) -> Result<ApiResponse<Vec<InventoryItem>>, AppError> {
        Ok(ApiResponse::success(self.repository.list().await?))
    }

    pub async fn list_low_stock(&self) -> Result<ApiResponse<Vec<InventoryItem>>, AppError> {
        Ok(ApiResponse::success(self.repository.list_low_stock().await?))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateInventoryItemRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;

        let item = self.repository.update(id, &request).await?;
        Ok(ApiResponse::success_with_message(item, "Inventory item updated"))
    }

    pub async fn adjust_stock(
        &self,
        id: i32,
        request: AdjustStockRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        let item = self.repository.adjust_stock(id, request.delta).await?;
        info!("📦 Stock de {} ajustado en {} -> {}", id, request.delta, item.quantity_in_stock);
        if item.is_low_stock() {
            warn!("⚠️ {} bajo nivel de reposición ({} <= {})", item.part_name, item.quantity_in_stock, item.reorder_level);
        }

        Ok(ApiResponse::success_with_message(item, "Stock adjusted"))
    }

    pub async fn set_reorder_level(
        &self,
        id: i32,
        request: SetReorderLevelRequest,
    ) -> Result<ApiResponse<InventoryItem>, AppError> {
        request.validate()?;

        let item = self.repository.set_reorder_level(id, request.reorder_level).await?;
        Ok(ApiResponse::success_with_message(item, "Reorder level updated"))
    }
}
