//! Roles and authorization policy.
//!
//! Every role or ownership rule in the service lives in [`authorize`]; handlers
//! describe what they are about to do as an [`Action`] and never inspect the
//! staff flag themselves.

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;

pub const NOT_SUPERUSER: &str = "You are not a superuser";
pub const NOT_ALLOWED: &str = "User not allowed to carry out request";

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Customer,
    Staff,
}

impl Role {
    pub fn from_staff_flag(is_staff: bool) -> Self {
        if is_staff {
            Self::Staff
        } else {
            Self::Customer
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Staff)
    }
}

/// Operation a principal wants to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ListAllOrders,
    /// Read an order regardless of its owner.
    ViewAnyOrder,
    UpdateOrderStatus,
    /// Change quantity/size of, or delete, an order owned by `owner`.
    ModifyOrder { owner: Option<i64> },
    ManageUsers,
}

impl Action {
    fn requires_staff(&self) -> bool {
        !matches!(self, Self::ModifyOrder { .. })
    }
}

/// Authorize a principal for an action.
///
/// - Staff may do everything
/// - Customers may only modify orders they own
pub fn authorize(principal: &AuthenticatedUser, action: Action) -> Result<(), BackendError> {
    if principal.role.is_staff() {
        return Ok(());
    }

    match action {
        Action::ModifyOrder { owner } if owner == Some(principal.id) => Ok(()),
        _ => {
            tracing::warn!("User {} denied {:?}", principal.username, action);
            let message = if action.requires_staff() { NOT_SUPERUSER } else { NOT_ALLOWED };
            Err(BackendError::forbidden(message))
        }
    }
}
