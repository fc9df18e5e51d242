//! Menu item database operations

use rust_decimal::Decimal;
use shared::models::menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::PgPool;

/// Clamp a price to two decimal places (currency display invariant)
fn normalize_price(price: Decimal) -> Decimal {
    price.round_dp(2)
}

pub async fn list(pool: &PgPool) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM menu_items ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<MenuItem>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM menu_items WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, data: &MenuItemCreate) -> Result<MenuItem, sqlx::Error> {
    let now = shared::util::now_millis();
    sqlx::query_as(
        r#"
        INSERT INTO menu_items (name, description, price, category, available, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(normalize_price(data.price))
    .bind(&data.category)
    .bind(data.available.unwrap_or(true))
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Full-field overwrite; returns None when the id does not exist.
pub async fn update(
    pool: &PgPool,
    id: i64,
    data: &MenuItemUpdate,
) -> Result<Option<MenuItem>, sqlx::Error> {
    let now = shared::util::now_millis();
    sqlx::query_as(
        r#"
        UPDATE menu_items SET
            name = $1, description = $2, price = $3, category = $4,
            available = $5, updated_at = $6
        WHERE id = $7
        RETURNING *
        "#,
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(normalize_price(data.price))
    .bind(&data.category)
    .bind(data.available.unwrap_or(true))
    .bind(now)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query("DELETE FROM menu_items WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
