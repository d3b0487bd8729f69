//! Accounts Module
//!
//! Staff-only user management behind `/users`. The stored user model and its
//! queries live in `backend::auth::users`; this module only adds the HTTP
//! surface.

pub mod handlers;

pub use handlers::{create_user, delete_user, list_users, update_user, USER_NOT_FOUND};
