/**
 * Order Handlers
 *
 * HTTP handlers for the `/order` routes. All of them run behind the auth
 * middleware and receive the caller through `AuthUser`. Role and ownership
 * rules are delegated to `authorize`; handlers only describe the action.
 *
 * # Lookup Order
 *
 * Handlers that touch an existing order load it first, so a missing ID is
 * reported as 404 before any ownership check runs.
 */

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::roles::{authorize, Action};
use crate::backend::error::BackendError;
use crate::backend::extract::{JsonBody, PathParam};
use crate::backend::middleware::AuthUser;
use crate::backend::orders::db;
use crate::backend::server::state::AppState;
use crate::shared::{Order, OrderRequest, OrderStatusRequest};

pub const ORDER_NOT_FOUND: &str = "Order not found";

async fn find_order(state: &AppState, id: i64) -> Result<Order, BackendError> {
    db::get_order(&state.db_pool, id).await?.ok_or_else(|| {
        tracing::debug!("Order {} does not exist", id);
        BackendError::not_found(ORDER_NOT_FOUND)
    })
}

/// Place an order
///
/// # Example Request
///
/// ```http
/// POST /order/order HTTP/1.1
/// Authorization: Bearer <access>
/// Content-Type: application/json
///
/// { "quantity": 2, "pizza_size": "LARGE" }
/// ```
///
/// # Example Response (201)
///
/// ```json
/// { "id": 1, "quantity": 2, "pizza_size": "LARGE", "order_status": "PENDING", "user_id": 1 }
/// ```
pub async fn place_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    JsonBody(request): JsonBody<OrderRequest>,
) -> Result<(StatusCode, Json<Order>), BackendError> {
    request.validate()?;

    let order = db::create_order(&state.db_pool, user.id, request.pizza_size, request.quantity).await?;

    tracing::info!(
        "Order {} placed by {}: {} x {}",
        order.id,
        user.username,
        order.quantity,
        order.pizza_size
    );
    Ok((StatusCode::CREATED, Json(order)))
}

/// List every order (staff)
pub async fn list_all_orders(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Order>>, BackendError> {
    authorize(&user, Action::ListAllOrders)?;

    let orders = db::list_orders(&state.db_pool).await?;
    Ok(Json(orders))
}

/// Get any order by ID (staff)
pub async fn get_order_by_id(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Order>, BackendError> {
    authorize(&user, Action::ViewAnyOrder)?;

    let order = find_order(&state, id).await?;
    Ok(Json(order))
}

/// List the caller's orders
pub async fn list_user_orders(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Order>>, BackendError> {
    let orders = db::list_orders_for_user(&state.db_pool, user.id).await?;
    Ok(Json(orders))
}

/// Get one of the caller's orders
///
/// An order owned by someone else is indistinguishable from a missing one.
pub async fn get_user_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<Json<Order>, BackendError> {
    let order = db::get_order_for_user(&state.db_pool, user.id, id)
        .await?
        .ok_or_else(|| BackendError::not_found(ORDER_NOT_FOUND))?;

    Ok(Json(order))
}

/// Change size and quantity (owner or staff)
pub async fn update_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<OrderRequest>,
) -> Result<Json<Order>, BackendError> {
    let existing = find_order(&state, id).await?;
    authorize(&user, Action::ModifyOrder { owner: existing.user_id })?;
    request.validate()?;

    let order = db::update_order_details(&state.db_pool, id, request.pizza_size, request.quantity)
        .await?
        .ok_or_else(|| BackendError::not_found(ORDER_NOT_FOUND))?;

    tracing::info!("Order {} updated by {}", order.id, user.username);
    Ok(Json(order))
}

/// Overwrite the status (staff)
///
/// A body without `order_status` resets the order to `PENDING`.
pub async fn update_order_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
    JsonBody(request): JsonBody<OrderStatusRequest>,
) -> Result<Json<Order>, BackendError> {
    authorize(&user, Action::UpdateOrderStatus)?;

    let order = db::update_order_status(&state.db_pool, id, request.order_status)
        .await?
        .ok_or_else(|| BackendError::not_found(ORDER_NOT_FOUND))?;

    tracing::info!("Order {} set to {} by {}", order.id, order.order_status, user.username);
    Ok(Json(order))
}

/// Delete an order (owner or staff)
pub async fn delete_order(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    PathParam(id): PathParam<i64>,
) -> Result<StatusCode, BackendError> {
    let existing = find_order(&state, id).await?;
    authorize(&user, Action::ModifyOrder { owner: existing.user_id })?;

    if !db::delete_order(&state.db_pool, id).await? {
        return Err(BackendError::not_found(ORDER_NOT_FOUND));
    }

    tracing::info!("Order {} deleted by {}", id, user.username);
    Ok(StatusCode::NO_CONTENT)
}
