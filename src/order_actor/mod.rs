//! The order store: an actor owning every placed order and the id cursor.

pub mod entity;
pub mod error;

pub use entity::price_items;
pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::{Order, OrderId};

/// Creates a new Order actor and its client.
///
/// Ids start at 1 and increase by one per successfully placed order.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, OrderId(1), |id: &OrderId| OrderId(id.0 + 1));
    let client = OrderClient::new(generic_client);

    (actor, client)
}
