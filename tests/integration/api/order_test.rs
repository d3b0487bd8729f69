//! Order API integration tests
//!
//! Tests for placing, reading, updating and deleting orders, including the
//! staff and ownership rules.

use axum::http::{header::AUTHORIZATION, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use pizza_delivery::backend::auth::roles::{NOT_ALLOWED, NOT_SUPERUSER};
use pizza_delivery::backend::orders::ORDER_NOT_FOUND;
use pizza_delivery::shared::{Order, OrderStatus, PizzaSize};

use crate::common::{assert_error, assert_validation_error, create_test_server, create_test_user, TestUser};

async fn place(server: &axum_test::TestServer, user: &TestUser, quantity: i32, size: &str) -> Order {
    let response = server
        .post("/order/order")
        .add_header(AUTHORIZATION, user.auth())
        .json(&json!({ "quantity": quantity, "pizza_size": size }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED, "{}", response.text());
    response.json::<Order>()
}

#[tokio::test]
async fn test_order_hello_requires_token() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    assert_eq!(server.get("/order/").await.status_code(), StatusCode::UNAUTHORIZED);
    let response = server.get("/order/").add_header(AUTHORIZATION, user.auth()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_place_order() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;

    let order = place(&server, &johndoe, 2, "LARGE").await;

    assert_eq!(order.quantity, 2);
    assert_eq!(order.pizza_size, PizzaSize::Large);
    assert_eq!(order.order_status, OrderStatus::Pending);
    assert_eq!(order.user_id, Some(johndoe.id));
}

#[tokio::test]
async fn test_place_order_defaults_to_small() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;

    let response = server
        .post("/order/order")
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "quantity": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Order>().pizza_size, PizzaSize::Small);
}

#[tokio::test]
async fn test_place_order_rejects_bad_input() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;

    let zero = server
        .post("/order/order")
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "quantity": 0, "pizza_size": "LARGE" }))
        .await;
    assert_eq!(zero.status_code(), StatusCode::BAD_REQUEST);

    let unknown_size = server
        .post("/order/order")
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "quantity": 1, "pizza_size": "GIGANTIC" }))
        .await;
    assert_validation_error(&unknown_size, "GIGANTIC");

    let missing_quantity = server
        .post("/order/order")
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "pizza_size": "LARGE" }))
        .await;
    assert_validation_error(&missing_quantity, "quantity");

    let out_of_range = server
        .post("/order/order")
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "quantity": 3_000_000_000_i64, "pizza_size": "LARGE" }))
        .await;
    assert_validation_error(&out_of_range, "quantity");
}

#[tokio::test]
async fn test_non_numeric_order_id_is_bad_request() {
    let server = create_test_server().await;
    let admin = create_test_user(&server, "admin", true).await;

    let fetch = server.get("/order/orders/abc").add_header(AUTHORIZATION, admin.auth()).await;
    assert_validation_error(&fetch, "abc");

    let delete = server.delete("/order/delete/abc").add_header(AUTHORIZATION, admin.auth()).await;
    assert_validation_error(&delete, "abc");
}

#[tokio::test]
async fn test_customer_cannot_list_or_fetch_any_order() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let order = place(&server, &johndoe, 1, "SMALL").await;

    let list = server.get("/order/order").add_header(AUTHORIZATION, johndoe.auth()).await;
    assert_error(&list, StatusCode::UNAUTHORIZED, NOT_SUPERUSER);

    let fetch = server
        .get(&format!("/order/orders/{}", order.id))
        .add_header(AUTHORIZATION, johndoe.auth())
        .await;
    assert_error(&fetch, StatusCode::UNAUTHORIZED, NOT_SUPERUSER);
}

#[tokio::test]
async fn test_staff_can_list_and_fetch_orders() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let admin = create_test_user(&server, "admin", true).await;
    let first = place(&server, &johndoe, 1, "SMALL").await;
    let second = place(&server, &johndoe, 3, "MEDIUM").await;

    let list = server.get("/order/order").add_header(AUTHORIZATION, admin.auth()).await;
    assert_eq!(list.status_code(), StatusCode::OK);
    assert_eq!(list.json::<Vec<Order>>(), vec![first.clone(), second]);

    let fetch = server
        .get(&format!("/order/orders/{}", first.id))
        .add_header(AUTHORIZATION, admin.auth())
        .await;
    assert_eq!(fetch.json::<Order>(), first);

    let missing = server.get("/order/orders/999").add_header(AUTHORIZATION, admin.auth()).await;
    assert_error(&missing, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}

#[tokio::test]
async fn test_user_sees_only_own_orders() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let janedoe = create_test_user(&server, "janedoe", false).await;
    let johns = place(&server, &johndoe, 2, "LARGE").await;
    let janes = place(&server, &janedoe, 1, "SMALL").await;

    let own = server.get("/order/user/orders").add_header(AUTHORIZATION, johndoe.auth()).await;
    assert_eq!(own.json::<Vec<Order>>(), vec![johns.clone()]);

    let one = server
        .get(&format!("/order/user/order/{}/", johns.id))
        .add_header(AUTHORIZATION, johndoe.auth())
        .await;
    assert_eq!(one.json::<Order>(), johns);

    let foreign = server
        .get(&format!("/order/user/order/{}/", janes.id))
        .add_header(AUTHORIZATION, johndoe.auth())
        .await;
    assert_error(&foreign, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}

#[tokio::test]
async fn test_owner_and_staff_can_update_order() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let janedoe = create_test_user(&server, "janedoe", false).await;
    let admin = create_test_user(&server, "admin", true).await;
    let order = place(&server, &johndoe, 1, "SMALL").await;
    let path = format!("/order/update/{}/", order.id);

    let by_owner = server
        .put(&path)
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "quantity": 4, "pizza_size": "EXTRA-LARGE" }))
        .await;
    assert_eq!(by_owner.status_code(), StatusCode::OK);
    let updated = by_owner.json::<Order>();
    assert_eq!(updated.quantity, 4);
    assert_eq!(updated.pizza_size, PizzaSize::ExtraLarge);

    let by_other = server
        .put(&path)
        .add_header(AUTHORIZATION, janedoe.auth())
        .json(&json!({ "quantity": 1, "pizza_size": "SMALL" }))
        .await;
    assert_error(&by_other, StatusCode::UNAUTHORIZED, NOT_ALLOWED);

    let by_staff = server
        .put(&path)
        .add_header(AUTHORIZATION, admin.auth())
        .json(&json!({ "quantity": 5, "pizza_size": "MEDIUM" }))
        .await;
    assert_eq!(by_staff.status_code(), StatusCode::OK);
    assert_eq!(by_staff.json::<Order>().quantity, 5);

    let missing = server
        .put("/order/update/999/")
        .add_header(AUTHORIZATION, admin.auth())
        .json(&json!({ "quantity": 5, "pizza_size": "MEDIUM" }))
        .await;
    assert_error(&missing, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}

#[tokio::test]
async fn test_status_update_is_staff_only() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let admin = create_test_user(&server, "admin", true).await;
    let order = place(&server, &johndoe, 1, "SMALL").await;
    let path = format!("/order/update/{}", order.id);

    let by_owner = server
        .patch(&path)
        .add_header(AUTHORIZATION, johndoe.auth())
        .json(&json!({ "order_status": "DELIVERED" }))
        .await;
    assert_error(&by_owner, StatusCode::UNAUTHORIZED, NOT_SUPERUSER);

    let in_transit = server
        .patch(&path)
        .add_header(AUTHORIZATION, admin.auth())
        .json(&json!({ "order_status": "IN-TRANSIT" }))
        .await;
    assert_eq!(in_transit.status_code(), StatusCode::OK);
    assert_eq!(in_transit.json::<Order>().order_status, OrderStatus::InTransit);

    // An omitted status resets to PENDING
    let reset = server
        .patch(&path)
        .add_header(AUTHORIZATION, admin.auth())
        .json(&json!({}))
        .await;
    assert_eq!(reset.json::<Order>().order_status, OrderStatus::Pending);

    let missing = server
        .patch("/order/update/999")
        .add_header(AUTHORIZATION, admin.auth())
        .json(&json!({ "order_status": "DELIVERED" }))
        .await;
    assert_error(&missing, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}

#[tokio::test]
async fn test_delete_order() {
    let server = create_test_server().await;
    let johndoe = create_test_user(&server, "johndoe", false).await;
    let janedoe = create_test_user(&server, "janedoe", false).await;
    let order = place(&server, &johndoe, 1, "SMALL").await;
    let path = format!("/order/delete/{}", order.id);

    let by_other = server.delete(&path).add_header(AUTHORIZATION, janedoe.auth()).await;
    assert_error(&by_other, StatusCode::UNAUTHORIZED, NOT_ALLOWED);

    let by_owner = server.delete(&path).add_header(AUTHORIZATION, johndoe.auth()).await;
    assert_eq!(by_owner.status_code(), StatusCode::NO_CONTENT);

    let again = server.delete(&path).add_header(AUTHORIZATION, johndoe.auth()).await;
    assert_error(&again, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}

#[tokio::test]
async fn test_delete_nonexistent_order_is_not_found() {
    let server = create_test_server().await;
    let admin = create_test_user(&server, "admin", true).await;

    let response = server.delete("/order/delete/12345").add_header(AUTHORIZATION, admin.auth()).await;
    assert_error(&response, StatusCode::NOT_FOUND, ORDER_NOT_FOUND);
}
