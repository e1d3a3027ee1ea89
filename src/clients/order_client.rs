//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>` and turns framework errors back into
//! [`OrderError`]s.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation and pricing happen in the actor's `on_create` hook; this client only
/// parses input that must be rejected before the store is consulted.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it with its id, total, status and timestamp filled in.
    #[instrument(skip(self, params), fields(lines = params.items.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, total = order.total_amount, "Order placed");
        Ok(order)
    }

    /// All orders in the order they were placed.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::NotFound)
    }

    /// Sets the status of an order.
    ///
    /// The status is checked before the order is looked up, so an unknown status is
    /// reported even when the order does not exist.
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = status.parse()?;
        let order = self
            .inner
            .update(id, OrderUpdate { status })
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, %status, "Order status updated");
        Ok(order)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(_) => OrderError::NotFound,
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(order_error) => *order_error,
                Err(other) => OrderError::ActorCommunicationError(other.to_string()),
            },
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{
        create_mock_client, expect_create, expect_get, expect_update, MockClient,
    };
    use crate::model::OrderItem;
    use chrono::Utc;

    fn sample_order(id: i64, status: OrderStatus) -> Order {
        Order {
            id: OrderId(id),
            items: vec![OrderItem::new(1, 2).unwrap()],
            customer_name: "Ada".into(),
            customer_email: "ada@example.com".into(),
            total_amount: 25.98,
            status,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_order_forwards_params() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move {
            order_client
                .create_order(OrderCreate {
                    items: vec![OrderItem::new(1, 2).unwrap()],
                    customer_name: "Ada".into(),
                    customer_email: "ada@example.com".into(),
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.customer_name, "Ada");
        responder.send(Ok(sample_order(1, OrderStatus::Pending))).unwrap();

        let order = create_task.await.unwrap().unwrap();
        assert_eq!(order.id, OrderId(1));
    }

    #[tokio::test]
    async fn test_entity_errors_are_recovered() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let create_task = tokio::spawn(async move {
            order_client
                .create_order(OrderCreate {
                    items: vec![OrderItem::new(99, 1).unwrap()],
                    customer_name: "Ada".into(),
                    customer_email: "ada@example.com".into(),
                })
                .await
        });

        let (_, responder) = expect_create(&mut receiver).await.unwrap();
        responder
            .send(Err(FrameworkError::EntityError(Box::new(OrderError::UnknownMenuItem(99)))))
            .unwrap();

        assert_eq!(create_task.await.unwrap(), Err(OrderError::UnknownMenuItem(99)));
    }

    #[tokio::test]
    async fn test_update_status_sends_parsed_status() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let update_task =
            tokio::spawn(async move { order_client.update_status(OrderId(3), "ready").await });

        let (id, update, responder) = expect_update(&mut receiver).await.unwrap();
        assert_eq!(id, OrderId(3));
        assert_eq!(update.status, OrderStatus::Ready);
        responder.send(Ok(sample_order(3, OrderStatus::Ready))).unwrap();

        assert_eq!(update_task.await.unwrap().unwrap().status, OrderStatus::Ready);
    }

    #[tokio::test]
    async fn test_get_order_maps_missing_to_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let get_task = tokio::spawn(async move { order_client.get_order(OrderId(4)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, OrderId(4));
        responder.send(Ok(None)).unwrap();

        assert_eq!(get_task.await.unwrap(), Err(OrderError::NotFound));
    }

    #[tokio::test]
    async fn test_invalid_status_never_reaches_actor() {
        // No expectations queued: any request would panic the mock.
        let mock = MockClient::<Order>::new();
        let order_client = OrderClient::new(mock.client());

        let result = order_client.update_status(OrderId(1), "bogus").await;

        assert_eq!(result, Err(OrderError::InvalidStatus));
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_and_list_with_expectations() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1))
            .return_ok(Some(sample_order(1, OrderStatus::Pending)));
        mock.expect_get(OrderId(2)).return_ok(None);
        mock.expect_list().return_ok(vec![sample_order(1, OrderStatus::Pending)]);
        mock.expect_update(OrderId(5))
            .return_err(FrameworkError::NotFound("5".into()));

        let order_client = OrderClient::new(mock.client());

        assert_eq!(order_client.get_order(OrderId(1)).await.unwrap().id, OrderId(1));
        assert_eq!(order_client.get_order(OrderId(2)).await, Err(OrderError::NotFound));
        assert_eq!(order_client.list_orders().await.unwrap().len(), 1);
        assert_eq!(
            order_client.update_status(OrderId(5), "cancelled").await,
            Err(OrderError::NotFound)
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let (client, receiver) = create_mock_client::<Order>(1);
        drop(receiver);
        let order_client = OrderClient::new(client);

        let result = order_client.list_orders().await;
        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }
}
