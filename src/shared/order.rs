//! Order Types
//!
//! Wire and storage representation of pizza orders. The size and status
//! enums travel as upper-case labels (`"EXTRA-LARGE"`, `"IN-TRANSIT"`) both in
//! JSON bodies and in the `orders` table. Parsing accepts any letter case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Pizza size of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PizzaSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl PizzaSize {
    pub const LABELS: [&'static str; 4] = ["SMALL", "MEDIUM", "LARGE", "EXTRA-LARGE"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
            Self::ExtraLarge => "EXTRA-LARGE",
        }
    }
}

impl FromStr for PizzaSize {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMALL" => Ok(Self::Small),
            "MEDIUM" => Ok(Self::Medium),
            "LARGE" => Ok(Self::Large),
            "EXTRA-LARGE" => Ok(Self::ExtraLarge),
            _ => Err(SharedError::unknown_choice("pizza_size", s, &Self::LABELS)),
        }
    }
}

/// Delivery status of an order
///
/// Staff may overwrite the status with any value; there is no enforced
/// lifecycle between the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    InTransit,
    Delivered,
}

impl OrderStatus {
    pub const LABELS: [&'static str; 3] = ["PENDING", "IN-TRANSIT", "DELIVERED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InTransit => "IN-TRANSIT",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "IN-TRANSIT" => Ok(Self::InTransit),
            "DELIVERED" => Ok(Self::Delivered),
            _ => Err(SharedError::unknown_choice("order_status", s, &Self::LABELS)),
        }
    }
}

macro_rules! string_conversions {
    ($ty:ty) => {
        impl TryFrom<String> for $ty {
            type Error = SharedError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_conversions!(PizzaSize);
string_conversions!(OrderStatus);

/// A stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub quantity: i32,
    #[sqlx(try_from = "String")]
    pub pizza_size: PizzaSize,
    #[sqlx(try_from = "String")]
    pub order_status: OrderStatus,
    /// Owning user; null once the owner account has been deleted
    pub user_id: Option<i64>,
}

/// Body of `POST /order/order` and `PUT /order/update/{id}/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub quantity: i32,
    #[serde(default)]
    pub pizza_size: PizzaSize,
}

impl OrderRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.quantity < 1 {
            return Err(SharedError::validation("quantity", "Quantity must be at least 1"));
        }
        Ok(())
    }
}

/// Body of `PATCH /order/update/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusRequest {
    #[serde(default)]
    pub order_status: OrderStatus,
}
