//! Orders and their lifecycle.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Update parameters ([`OrderUpdate`])
use crate::model::MenuItemId;
use crate::order_actor::OrderError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::num::NonZeroU32;
use std::str::FromStr;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line of an order: a menu item and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: MenuItemId,
    pub quantity: NonZeroU32,
}

impl OrderItem {
    /// Returns `None` when `quantity` is zero.
    pub fn new(menu_item_id: MenuItemId, quantity: u32) -> Option<Self> {
        NonZeroU32::new(quantity).map(|quantity| Self {
            menu_item_id,
            quantity,
        })
    }
}

/// Lifecycle of an order. Any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    /// Case-sensitive: only the lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(OrderError::InvalidStatus)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub customer_email: String,
    /// Always computed by the store from catalog prices.
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for placing a new order.
///
/// Clients may send `id`, `total_amount`, `status` or `created_at` as well; they are
/// ignored, the store assigns all four.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub customer_email: String,
}

/// Payload for changing an existing order.
#[derive(Debug, Clone, Copy)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parses_lowercase_names_only() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
        assert_eq!("bogus".parse::<OrderStatus>(), Err(OrderError::InvalidStatus));
        assert_eq!("Pending".parse::<OrderStatus>(), Err(OrderError::InvalidStatus));
    }

    #[test]
    fn test_order_create_ignores_server_assigned_fields() {
        let body = r#"{
            "id": 77,
            "items": [{"menu_item_id": 1, "quantity": 2}],
            "customer_name": "Ada",
            "customer_email": "ada@example.com",
            "total_amount": 0.01,
            "status": "delivered"
        }"#;
        let params: OrderCreate = serde_json::from_str(body).unwrap();
        assert_eq!(params.items, vec![OrderItem::new(1, 2).unwrap()]);
        assert_eq!(params.customer_name, "Ada");
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let body = r#"{"menu_item_id": 1, "quantity": 0}"#;
        assert!(serde_json::from_str::<OrderItem>(body).is_err());
    }
}
