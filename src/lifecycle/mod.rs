//! # System Lifecycle & Orchestration
//!
//! Starts the order actor, wires it to the catalog, and shuts it down again.
//!
//! ## Dependency Injection via Context
//!
//! The order actor is created without dependencies and receives the
//! [`MenuCatalog`](crate::catalog::MenuCatalog) when it starts running:
//!
//! ```rust,ignore
//! let (order_actor, order_client) = order_actor::new(32);
//! let handle = tokio::spawn(order_actor.run(catalog.clone()));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the order channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for the actor task to finish
//!
//! Every clone of the [`OrderClient`](crate::clients::OrderClient) keeps the actor
//! alive, including the ones held by the HTTP router's state. Stop serving before
//! calling [`RestaurantSystem::shutdown`].
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging, filtered by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod order_system;
pub mod tracing;

pub use order_system::*;
pub use tracing::*;
