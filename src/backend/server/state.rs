/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the only handle handlers get on shared resources:
 * - the SQLite connection pool (the store)
 * - the token service (signing keys and lifetimes)
 * - the bcrypt cost used when hashing new passwords
 *
 * Everything inside is cheap to clone; the pool and the token service are
 * reference counted.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db_pool: SqlitePool,

    pub tokens: Arc<TokenService>,

    pub password_hash_cost: u32,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, tokens: TokenService, password_hash_cost: u32) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(tokens),
            password_hash_cost,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
