/**
 * Order Database Operations
 *
 * This module holds the order store. Every write is a single statement, so
 * concurrent updates resolve as last-write-wins. Sizes and statuses are
 * stored as their wire labels (`LARGE`, `IN-TRANSIT`, ...).
 */

use sqlx::SqlitePool;

use crate::shared::{Order, OrderStatus, PizzaSize};

const ORDER_COLUMNS: &str = "id, quantity, pizza_size, order_status, user_id";

/// Create an order with status `PENDING`
pub async fn create_order(
    pool: &SqlitePool,
    user_id: i64,
    pizza_size: PizzaSize,
    quantity: i32,
) -> Result<Order, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        r#"
        INSERT INTO orders (quantity, pizza_size, order_status, user_id)
        VALUES (?, ?, ?, ?)
        RETURNING {ORDER_COLUMNS}
        "#
    ))
    .bind(quantity)
    .bind(pizza_size.as_str())
    .bind(OrderStatus::Pending.as_str())
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// List every order ordered by ID
pub async fn list_orders(pool: &SqlitePool) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders ORDER BY id"))
        .fetch_all(pool)
        .await
}

/// Get order by ID
pub async fn get_order(pool: &SqlitePool, id: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// List the orders owned by a user
pub async fn list_orders_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = ? ORDER BY id"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Get an order only if `user_id` owns it
pub async fn get_order_for_user(pool: &SqlitePool, user_id: i64, id: i64) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "SELECT {ORDER_COLUMNS} FROM orders WHERE id = ? AND user_id = ?"
    ))
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Overwrite size and quantity
///
/// # Returns
/// Updated order, `None` if no order has this ID
pub async fn update_order_details(
    pool: &SqlitePool,
    id: i64,
    pizza_size: PizzaSize,
    quantity: i32,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        r#"
        UPDATE orders
        SET quantity = ?, pizza_size = ?
        WHERE id = ?
        RETURNING {ORDER_COLUMNS}
        "#
    ))
    .bind(quantity)
    .bind(pizza_size.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrite the status
///
/// # Returns
/// Updated order, `None` if no order has this ID
pub async fn update_order_status(
    pool: &SqlitePool,
    id: i64,
    order_status: OrderStatus,
) -> Result<Option<Order>, sqlx::Error> {
    sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET order_status = ? WHERE id = ? RETURNING {ORDER_COLUMNS}"
    ))
    .bind(order_status.as_str())
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete an order
///
/// # Returns
/// Whether a row was deleted
pub async fn delete_order(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
