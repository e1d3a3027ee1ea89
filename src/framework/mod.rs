//! Generic actor framework for resource management.
//!
//! This module provides the building blocks the order store is made of: a resource
//! actor that owns a collection of entities and processes requests one at a time.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store and the id cursor
//! - [`ResourceClient`] - Type-safe, cloneable handle for talking to an actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
