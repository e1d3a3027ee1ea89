use crate::api::AppState;
use crate::auth::AuthStub;
use crate::catalog::MenuCatalog;
use crate::clients::OrderClient;
use tracing::{error, info};

/// The runtime orchestrator of the restaurant service.
///
/// `RestaurantSystem` owns:
/// - the immutable **menu catalog**
/// - the **auth stub**
/// - a client for the **order actor**, which runs in its own task with the catalog
///   injected as its context
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new(32);
///
/// let order = system.order_client.create_order(params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub catalog: MenuCatalog,
    pub auth: AuthStub,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with the house menu.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(order_buffer: usize) -> Self {
        Self::with_catalog(MenuCatalog::quickbite(), order_buffer)
    }

    pub fn with_catalog(catalog: MenuCatalog, order_buffer: usize) -> Self {
        let (order_actor, order_client) = crate::order_actor::new(order_buffer);
        let order_handle = tokio::spawn(order_actor.run(catalog.clone()));

        info!(menu_items = catalog.len(), "Restaurant system started");

        Self {
            catalog,
            auth: AuthStub::new(),
            order_client,
            handles: vec![order_handle],
        }
    }

    /// The shared state handed to the HTTP router.
    pub fn app_state(&self) -> AppState {
        AppState {
            catalog: self.catalog.clone(),
            auth: self.auth,
            orders: self.order_client.clone(),
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's own client and waits for the actor to drain. Returns an
    /// error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
