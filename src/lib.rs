//! # QuickBite API
//!
//! > **A restaurant ordering service: a fixed menu, an in-memory order book, and a stub
//! > login, served as JSON over HTTP.**
//!
//! Orders live inside a single actor task. Every create, read and status change is a
//! message processed in arrival order, so id allocation and updates never race and no
//! lock guards the order book.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and its message loop.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor),
//!   [`MockClient`](framework::mock::MockClient).
//!
//! ### 2. The Domain ([`model`], [`catalog`], [`auth`], [`order_actor`])
//! - [`model`]: serializable data types shared across layers.
//! - [`catalog`]: the read-only menu.
//! - [`auth`]: fixed credentials and a single accepted token.
//! - [`order_actor`]: pricing and status rules for [`Order`](model::Order).
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) hides message passing and hands back
//! [`OrderError`](order_actor::OrderError)s.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`RestaurantSystem`](lifecycle::RestaurantSystem) starts the order actor with the
//! catalog as its context and shuts it down again.
//!
//! ### 5. The Surface ([`api`], [`server`], [`config`])
//! Routes, extractors and the `{"detail": ...}` error contract, plus the listener and
//! environment configuration.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl localhost:8000/menu?category=pizza
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod api;
pub mod auth;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod server;
