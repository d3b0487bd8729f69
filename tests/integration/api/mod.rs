//! HTTP API integration tests

pub mod auth_test;
pub mod order_test;
