//! Represents a dish on the menu.
//!
//! Menu items are built once when the catalog is created and never change afterwards.
use serde::{Deserialize, Serialize};

/// Identifier of a [`MenuItem`].
pub type MenuItemId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

fn available_by_default() -> bool {
    true
}

impl MenuItem {
    /// Creates an available menu item.
    ///
    /// # Arguments
    /// * `id` - Unique, stable identifier
    /// * `name` - Display name
    /// * `description` - Short description
    /// * `price` - Unit price, non-negative
    /// * `category` - Category used for filtering (e.g. "burgers")
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
            available: true,
        }
    }
}
