/**
 * Order Routes
 *
 * Every route here requires an access token. Trailing slashes are part of
 * the public paths and are matched exactly.
 *
 * # Routes
 *
 * - `GET /order/` - Hello
 * - `POST /order/order` - Place an order
 * - `GET /order/order` - List all orders (staff)
 * - `GET /order/orders/{id}` - Get any order (staff)
 * - `GET /order/user/orders` - List own orders
 * - `GET /order/user/order/{id}/` - Get own order
 * - `PUT /order/update/{id}/` - Change size/quantity (owner or staff)
 * - `PATCH /order/update/{id}` - Change status (staff)
 * - `DELETE /order/delete/{id}` - Delete (owner or staff)
 */

use axum::{
    middleware,
    routing::{delete, get, patch, put},
    Router,
};

use crate::backend::auth::handlers::protected_hello;
use crate::backend::middleware::auth_middleware;
use crate::backend::orders::{
    delete_order, get_order_by_id, get_user_order, list_all_orders, list_user_orders, place_order,
    update_order, update_order_status,
};
use crate::backend::server::state::AppState;

/// Configure order routes behind the auth middleware
pub fn configure_order_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/order/", get(protected_hello))
        .route("/order/order", get(list_all_orders).post(place_order))
        .route("/order/orders/{id}", get(get_order_by_id))
        .route("/order/user/orders", get(list_user_orders))
        .route("/order/user/order/{id}/", get(get_user_order))
        .route("/order/update/{id}/", put(update_order))
        .route("/order/update/{id}", patch(update_order_status))
        .route("/order/delete/{id}", delete(delete_order))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}
