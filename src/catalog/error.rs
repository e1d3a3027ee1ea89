//! Error types for the menu catalog.

use thiserror::Error;

/// Errors that can occur while reading the catalog.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// No menu item has the requested id.
    #[error("Menu item not found")]
    ItemNotFound,

    /// A category filter matched nothing.
    #[error("No items found in category: {0}")]
    EmptyCategory(String),
}
