//! Authentication API integration tests
//!
//! Tests for signup, login, refresh and the access-token gate.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use pizza_delivery::backend::auth::handlers::{AccessToken, TokenPair, UserResponse};
use pizza_delivery::backend::auth::users::{EMAIL_TAKEN, USERNAME_TAKEN};
use pizza_delivery::backend::error::{INVALID_CREDENTIALS, INVALID_REFRESH_TOKEN, INVALID_TOKEN};

use crate::common::{
    assert_error, assert_no_password, assert_validation_error, auth_header, create_test_server, create_test_user, signup_user, TEST_PASSWORD,
};

#[tokio::test]
async fn test_public_hello() {
    let server = create_test_server().await;

    let response = server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_signup_success() {
    let server = create_test_server().await;

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "username": "johndoe",
            "email": "johndoe@gmail.com",
            "password": "password"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_no_password(&response);

    let user = response.json::<UserResponse>();
    assert_eq!(user.username, "johndoe");
    assert_eq!(user.email, "johndoe@gmail.com");
    assert!(!user.is_staff);
    assert!(user.is_active);
}

#[tokio::test]
async fn test_signup_duplicate_email() {
    let server = create_test_server().await;
    signup_user(&server, "johndoe", false).await;

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "username": "someoneelse",
            "email": "johndoe@gmail.com",
            "password": "password"
        }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, EMAIL_TAKEN);
}

#[tokio::test]
async fn test_signup_duplicate_username() {
    let server = create_test_server().await;
    signup_user(&server, "johndoe", false).await;

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "username": "johndoe",
            "email": "other@gmail.com",
            "password": "password"
        }))
        .await;

    assert_error(&response, StatusCode::BAD_REQUEST, USERNAME_TAKEN);
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let server = create_test_server().await;

    let response = server
        .post("/auth/signup")
        .json(&json!({
            "username": "johndoe",
            "email": "not-an-email",
            "password": "password"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_signup_missing_field_is_json_400() {
    let server = create_test_server().await;

    let response = server.post("/auth/signup").json(&json!({ "username": "x" })).await;

    assert_validation_error(&response, "email");
}

#[tokio::test]
async fn test_login_malformed_body_is_json_400() {
    let server = create_test_server().await;

    let response = server
        .post("/auth/login")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["status"], json!(400));
}

#[tokio::test]
async fn test_login_returns_token_pair() {
    let server = create_test_server().await;
    signup_user(&server, "johndoe", false).await;

    let response = server
        .post("/auth/login")
        .json(&json!({ "username": "johndoe", "password": TEST_PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let tokens = response.json::<TokenPair>();
    assert!(!tokens.access.is_empty());
    assert!(!tokens.refresh.is_empty());
    assert_ne!(tokens.access, tokens.refresh);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_look_alike() {
    let server = create_test_server().await;
    signup_user(&server, "johndoe", false).await;

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({ "username": "johndoe", "password": "wrong" }))
        .await;
    assert_error(&wrong_password, StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);

    let unknown_user = server
        .post("/auth/login")
        .json(&json!({ "username": "nobody", "password": "wrong" }))
        .await;
    assert_error(&unknown_user, StatusCode::BAD_REQUEST, INVALID_CREDENTIALS);
}

#[tokio::test]
async fn test_protected_hello_requires_token() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    let missing = server.get("/auth/").await;
    assert_error(&missing, StatusCode::UNAUTHORIZED, INVALID_TOKEN);

    let response = server.get("/auth/").add_header(AUTHORIZATION, user.auth()).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Hello World" }));
}

#[tokio::test]
async fn test_bearer_scheme_is_case_insensitive() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    for scheme in ["bearer", "BEARER"] {
        let header = HeaderValue::from_str(&format!("{} {}", scheme, user.access)).unwrap();
        let response = server.get("/auth/").add_header(AUTHORIZATION, header).await;
        assert_eq!(response.status_code(), StatusCode::OK, "scheme {}", scheme);
    }
}

#[tokio::test]
async fn test_tampered_token_rejected() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    let mut tampered = user.access.clone();
    tampered.push('x');

    let response = server.get("/auth/").add_header(AUTHORIZATION, auth_header(&tampered)).await;
    assert_error(&response, StatusCode::UNAUTHORIZED, INVALID_TOKEN);
}

#[tokio::test]
async fn test_refresh_issues_new_access_token() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    let response = server
        .get("/auth/refresh")
        .add_header(AUTHORIZATION, auth_header(&user.refresh))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let AccessToken { access } = response.json::<AccessToken>();
    let hello = server.get("/order/").add_header(AUTHORIZATION, auth_header(&access)).await;
    assert_eq!(hello.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_token_kinds_are_not_interchangeable() {
    let server = create_test_server().await;
    let user = create_test_user(&server, "johndoe", false).await;

    let refresh_as_access = server
        .get("/order/user/orders")
        .add_header(AUTHORIZATION, auth_header(&user.refresh))
        .await;
    assert_error(&refresh_as_access, StatusCode::UNAUTHORIZED, INVALID_TOKEN);

    let access_as_refresh = server
        .get("/auth/refresh")
        .add_header(AUTHORIZATION, auth_header(&user.access))
        .await;
    assert_error(&access_as_refresh, StatusCode::UNAUTHORIZED, INVALID_REFRESH_TOKEN);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = create_test_server().await;

    let response = server.get("/menu").await;
    assert_error(&response, StatusCode::NOT_FOUND, "Not Found");
}
