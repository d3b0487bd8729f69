//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── refresh.rs  - Token refresh and hello handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration
//! - **`login`** - POST /auth/login - Token pair for username + password
//! - **`refresh`** - GET /auth/refresh - New access token for a refresh token
//! - **`protected_hello`** - GET /auth/ - Access token check
//!
//! # Example
//!
//! ```rust,no_run
//! use pizza_delivery::backend::auth::handlers::{signup, login, refresh};
//! use pizza_delivery::backend::server::state::AppState;
//! use axum::{routing::{get, post}, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/auth/signup", post(signup))
//!     .route("/auth/login", post(login))
//!     .route("/auth/refresh", get(refresh));
//! ```

pub mod types;

pub mod signup;

pub mod login;

pub mod refresh;

// Re-export commonly used types
pub use types::{
    AccessToken, LoginRequest, MessageResponse, SignupRequest, TokenPair, UserResponse, UserUpdateRequest,
};

// Re-export handlers
pub use signup::{register, signup};
pub use login::login;
pub use refresh::{hello, protected_hello, refresh};
