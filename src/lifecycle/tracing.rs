//! # Observability & Tracing
//!
//! Structured logging for the whole service.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Store Operations**: Create, Get, List, Update, with the order id
//! - **HTTP Requests**: One span per request (method, path, status, latency)
//! - **Errors**: Rejected logins, failed creates, unknown orders
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Request spans from tower-http
//! RUST_LOG=info,tower_http=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**, placing one order prints something like:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO Server running on 0.0.0.0:8000
//! INFO create_order: Created entity_type="Order" id=1 size=1
//! INFO create_order: Order placed order_id=1 total=25.98
//! ```

/// Initializes the global `tracing` subscriber.
///
/// Filtering comes from `RUST_LOG`. The format is compact and omits module paths;
/// actor logs carry `entity_type` instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
