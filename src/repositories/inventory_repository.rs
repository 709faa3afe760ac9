use sqlx::{PgConnection, PgPool};

use crate::models::inventory::{
    apply_stock_delta, CreateInventoryItemRequest, InventoryItem, UpdateInventoryItemRequest,
};
use crate::utils::errors::{not_found_error, validation_error, AppResult};

pub struct InventoryRepository {
    pool: PgPool,
}

impl InventoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &CreateInventoryItemRequest) -> AppResult<InventoryItem> {
        if request.quantity_in_stock < 0 {
            return Err(validation_error("quantity_in_stock", "must not be negative"));
        }
        if request.reorder_level < 0 {
            return Err(validation_error("reorder_level", "must not be negative"));
        }

        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            INSERT INTO inventory (part_name, description, unit_price, quantity_in_stock, reorder_level)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(request.part_name.trim())
        .bind(&request.description)
        .bind(request.unit_price)
        .bind(request.quantity_in_stock)
        .bind(request.reorder_level)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn find_by_id(&self, item_id: i32) -> AppResult<Option<InventoryItem>> {
        let item = sqlx::query_as::<_, InventoryItem>("SELECT * FROM inventory WHERE item_id = $1")
            .bind(item_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    pub async fn get(&self, item_id: i32) -> AppResult<InventoryItem> {
        self.find_by_id(item_id)
            .await?
            .ok_or_else(|| not_found_error("Inventory item", item_id))
    }

    pub async fn list(&self) -> AppResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            "SELECT * FROM inventory ORDER BY part_name, item_id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list_low_stock(&self) -> AppResult<Vec<InventoryItem>> {
        let items = sqlx::query_as::<_, InventoryItem>(
            r#"
            SELECT * FROM inventory
            WHERE quantity_in_stock <= reorder_level
            ORDER BY part_name, item_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn update(
        &self,
        item_id: i32,
        request: &UpdateInventoryItemRequest,
    ) -> AppResult<InventoryItem> {
        if matches!(request.quantity_in_stock, Some(q) if q < 0) {
            return Err(validation_error("quantity_in_stock", "must not be negative"));
        }
        if matches!(request.reorder_level, Some(r) if r < 0) {
            return Err(validation_error("reorder_level", "must not be negative"));
        }

        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory
            SET part_name = COALESCE($2, part_name),
                description = COALESCE($3, description),
                unit_price = COALESCE($4, unit_price),
                quantity_in_stock = COALESCE($5, quantity_in_stock),
                reorder_level = COALESCE($6, reorder_level),
                updated_at = NOW()
            WHERE item_id = $1
            RETURNING *
            "#,
        )
        .bind(item_id)
        .bind(request.part_name.as_deref().map(str::trim))
        .bind(&request.description)
        .bind(request.unit_price)
        .bind(request.quantity_in_stock)
        .bind(request.reorder_level)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Inventory item", item_id))?;

        Ok(item)
    }

    pub async fn set_reorder_level(&self, item_id: i32, reorder_level: i32) -> AppResult<InventoryItem> {
        if reorder_level < 0 {
            return Err(validation_error("reorder_level", "must not be negative"));
        }

        let item = sqlx::query_as::<_, InventoryItem>(
            r#"
            UPDATE inventory
            SET reorder_level = $2, updated_at = NOW()
            WHERE item_id = $1
            RETURNING *
            "#,
        )
        .bind(item_id)
        .bind(reorder_level)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found_error("Inventory item", item_id))?;

        Ok(item)
    }

    /// Ajuste de stock con signo en su propia transacción
    pub async fn adjust_stock(&self, item_id: i32, delta: i32) -> AppResult<InventoryItem> {
        let mut tx = self.pool.begin().await?;
        let item = adjust_stock_in(&mut *tx, item_id, delta).await?;
        tx.commit().await?;

        Ok(item)
    }
}

/// Aplica `delta` al stock dentro de la transacción del llamador. La fila
/// queda bloqueada hasta el commit, así dos consumos concurrentes del mismo
/// repuesto no pueden pasar ambos la comprobación.
pub(crate) async fn adjust_stock_in(
    conn: &mut PgConnection,
    item_id: i32,
    delta: i32,
) -> AppResult<InventoryItem> {
    let current = sqlx::query_scalar::<_, i32>(
        "SELECT quantity_in_stock FROM inventory WHERE item_id = $1 FOR UPDATE",
    )
    .bind(item_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| not_found_error("Inventory item", item_id))?;

    let next = apply_stock_delta(item_id, current, delta)?;

    let item = sqlx::query_as::<_, InventoryItem>(
        r#"
        UPDATE inventory
        SET quantity_in_stock = $2, updated_at = NOW()
        WHERE item_id = $1
        RETURNING *
        "#,
    )
    .bind(item_id)
    .bind(next)
    .fetch_one(&mut *conn)
    .await?;

    Ok(item)
}
