//! Entity trait implementation for the Order domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that lets [`Order`]
//! be managed by the generic [`ResourceActor`](crate::framework::ResourceActor).
//! The actor's context is the [`MenuCatalog`]: prices are looked up at creation time,
//! never taken from the client.

use crate::catalog::MenuCatalog;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Context = MenuCatalog;
    type Error = OrderError;

    /// Builds a pending order stamped with the current time. The total is filled in by
    /// `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            items: params.items,
            customer_name: params.customer_name,
            customer_email: params.customer_email,
            total_amount: 0.0,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Validates every line against the catalog and prices the order.
    async fn on_create(&mut self, catalog: &MenuCatalog) -> Result<(), OrderError> {
        self.total_amount = price_items(catalog, &self.items)?;
        Ok(())
    }

    /// Sets the status. Transitions are not restricted.
    async fn on_update(&mut self, update: OrderUpdate, _catalog: &MenuCatalog) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }
}

/// Sum of unit price times quantity, rounded to cents.
///
/// Fails on the first line whose menu item is not in the catalog.
pub fn price_items(catalog: &MenuCatalog, items: &[OrderItem]) -> Result<f64, OrderError> {
    let mut total = 0.0;
    for item in items {
        let menu_item = catalog
            .get(item.menu_item_id)
            .map_err(|_| OrderError::UnknownMenuItem(item.menu_item_id))?;
        total += menu_item.price * f64::from(item.quantity.get());
    }
    Ok(round_cents(total))
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(menu_item_id: i64, quantity: u32) -> OrderItem {
        OrderItem::new(menu_item_id, quantity).unwrap()
    }

    #[test]
    fn test_price_items_multiplies_and_rounds() {
        let catalog = MenuCatalog::quickbite();
        assert_eq!(price_items(&catalog, &[line(1, 2)]), Ok(25.98));
        assert_eq!(price_items(&catalog, &[line(1, 1), line(6, 3), line(8, 1)]), Ok(31.95));
        assert_eq!(price_items(&catalog, &[]), Ok(0.0));
    }

    #[test]
    fn test_price_items_names_first_unknown_item() {
        let catalog = MenuCatalog::quickbite();
        assert_eq!(
            price_items(&catalog, &[line(1, 1), line(42, 1), line(43, 1)]),
            Err(OrderError::UnknownMenuItem(42))
        );
    }

    #[tokio::test]
    async fn test_on_update_changes_only_status() {
        let catalog = MenuCatalog::quickbite();
        let params = OrderCreate {
            items: vec![line(3, 1)],
            customer_name: "Grace".into(),
            customer_email: "grace@example.com".into(),
        };
        let mut order = Order::from_create_params(OrderId(1), params).unwrap();
        order.on_create(&catalog).await.unwrap();
        let before = order.clone();

        order
            .on_update(OrderUpdate { status: OrderStatus::Ready }, &catalog)
            .await
            .unwrap();

        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.total_amount, before.total_amount);
        assert_eq!(order.created_at, before.created_at);
    }
}
