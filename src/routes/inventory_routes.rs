use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};

use crate::controllers::inventory_controller::InventoryController;
use crate::dto::api_response::ApiResponse;
use crate::models::inventory::{
    AdjustStockRequest, CreateInventoryItemRequest, InventoryItem, SetReorderLevelRequest,
    UpdateInventoryItemRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extract::{JsonBody, PathParam};

pub fn create_inventory_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/low-stock", get(list_low_stock))
        .route("/:id", get(get_item).put(update_item))
        .route("/:id/stock", put(adjust_stock))
        .route("/:id/reorder-level", put(set_reorder_level))
}

async fn create_item(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateInventoryItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn list_low_stock(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<InventoryItem>>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.list_low_stock().await?))
}

async fn get_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.get(id).await?))
}

async fn update_item(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<UpdateInventoryItemRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn adjust_stock(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<AdjustStockRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.adjust_stock(id, request).await?))
}

async fn set_reorder_level(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    JsonBody(request): JsonBody<SetReorderLevelRequest>,
) -> Result<Json<ApiResponse<InventoryItem>>, AppError> {
    let controller = InventoryController::new(state.pool.clone());
    Ok(Json(controller.set_reorder_level(id, request).await?))
}
