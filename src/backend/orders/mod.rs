//! Orders Module
//!
//! Order persistence and the `/order` HTTP handlers.
//!
//! - **`db`** - SQL queries over the `orders` table
//! - **`handlers`** - Axum handlers, one per route

pub mod db;

pub mod handlers;

pub use handlers::{
    delete_order, get_order_by_id, get_user_order, list_all_orders, list_user_orders, place_order,
    update_order, update_order_status, ORDER_NOT_FOUND,
};
