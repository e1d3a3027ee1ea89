use quickbite_api::lifecycle::RestaurantSystem;
use quickbite_api::model::{OrderCreate, OrderId, OrderItem, OrderStatus};
use quickbite_api::order_actor::OrderError;

fn order_for(name: &str, lines: &[(i64, u32)]) -> OrderCreate {
    OrderCreate {
        items: lines
            .iter()
            .map(|&(id, quantity)| OrderItem::new(id, quantity).unwrap())
            .collect(),
        customer_name: name.to_string(),
        customer_email: format!("{}@example.com", name.to_lowercase()),
    }
}

/// Full end-to-end test against the real order actor and the house menu.
#[tokio::test]
async fn test_full_order_lifecycle() {
    let system = RestaurantSystem::new(32);

    // Place an order: two burgers
    let order = system
        .order_client
        .create_order(order_for("Alice", &[(1, 2)]))
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.total_amount, 25.98);
    assert_eq!(order.status, OrderStatus::Pending);

    // Read it back
    let fetched = system.order_client.get_order(OrderId(1)).await.unwrap();
    assert_eq!(fetched, order);

    // Walk it through the kitchen
    for status in ["preparing", "ready", "delivered"] {
        let updated = system
            .order_client
            .update_status(OrderId(1), status)
            .await
            .expect("Failed to update status");
        assert_eq!(updated.status.as_str(), status);
    }

    let delivered = system.order_client.get_order(OrderId(1)).await.unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert_eq!(delivered.created_at, order.created_at);
    assert_eq!(delivered.total_amount, order.total_amount);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_ids_are_sequential_and_rejections_do_not_consume_them() {
    let system = RestaurantSystem::new(32);
    let orders = &system.order_client;

    assert_eq!(orders.create_order(order_for("A", &[(3, 1)])).await.unwrap().id, OrderId(1));

    // Unknown menu item: nothing stored, no id used
    let rejected = orders.create_order(order_for("B", &[(1, 1), (99, 1)])).await;
    assert_eq!(rejected, Err(OrderError::UnknownMenuItem(99)));

    assert_eq!(orders.create_order(order_for("C", &[(5, 2)])).await.unwrap().id, OrderId(2));
    assert_eq!(orders.create_order(order_for("D", &[(7, 1)])).await.unwrap().id, OrderId(3));

    let listed = orders.list_orders().await.unwrap();
    let names: Vec<_> = listed.iter().map(|o| o.customer_name.as_str()).collect();
    assert_eq!(names, ["A", "C", "D"]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_status_leaves_order_untouched() {
    let system = RestaurantSystem::new(32);
    let orders = &system.order_client;

    orders.create_order(order_for("Alice", &[(2, 1)])).await.unwrap();

    assert_eq!(orders.update_status(OrderId(1), "bogus").await, Err(OrderError::InvalidStatus));
    assert_eq!(orders.update_status(OrderId(1), "READY").await, Err(OrderError::InvalidStatus));
    assert_eq!(orders.get_order(OrderId(1)).await.unwrap().status, OrderStatus::Pending);

    // Status is validated before the lookup
    assert_eq!(orders.update_status(OrderId(42), "bogus").await, Err(OrderError::InvalidStatus));
    assert_eq!(orders.update_status(OrderId(42), "ready").await, Err(OrderError::NotFound));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_any_transition_is_allowed() {
    let system = RestaurantSystem::new(32);
    let orders = &system.order_client;

    orders.create_order(order_for("Alice", &[(4, 1)])).await.unwrap();
    orders.update_status(OrderId(1), "cancelled").await.unwrap();
    let reopened = orders.update_status(OrderId(1), "pending").await.unwrap();

    assert_eq!(reopened.status, OrderStatus::Pending);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_accepted_with_zero_total() {
    let system = RestaurantSystem::new(32);

    let order = system.order_client.create_order(order_for("Nobody", &[])).await.unwrap();

    assert_eq!(order.total_amount, 0.0);
    assert!(order.items.is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_sequential_ids() {
    let system = RestaurantSystem::new(4);

    let tasks: Vec<_> = (0..25)
        .map(|i| {
            let client = system.order_client.clone();
            tokio::spawn(async move {
                client
                    .create_order(order_for(&format!("Customer{i}"), &[(8, 1)]))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        ids.push(task.await.unwrap().0);
    }
    ids.sort_unstable();

    assert_eq!(ids, (1..=25).collect::<Vec<i64>>());
    assert_eq!(system.order_client.list_orders().await.unwrap().len(), 25);

    system.shutdown().await.unwrap();
}
