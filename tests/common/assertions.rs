//! Response assertions
//!
//! Every failure body has the shape `{"error": <message>, "status": <code>}`.

use axum::http::StatusCode;
use axum_test::TestResponse;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// Assert status code and error body
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status, "{}", response.text());
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": message, "status": status.as_u16() })
    );
}

/// Assert that a body carries no password material
pub fn assert_no_password(response: &TestResponse) {
    let body = response.text();
    assert!(!body.contains("password"), "body leaks a password field: {}", body);
    assert!(!body.contains("$2b$"), "body leaks a bcrypt hash: {}", body);
}

/// Assert a 400 validation body whose message mentions `needle`
pub fn assert_validation_error(response: &TestResponse, needle: &str) {
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", response.text());

    let body = response.json::<Value>();
    assert_eq!(body["status"], json!(400));
    let message = body["error"].as_str().unwrap_or_default();
    assert!(message.contains(needle), "'{}' does not mention '{}'", message, needle);
}
