//! The menu catalog: a fixed, ordered list of dishes, read-only at runtime.
//!
//! [`MenuCatalog`] is a value, not an actor. It is built once at startup and cloned
//! into every place that needs it (the order actor's context, the HTTP state); clones
//! share the same backing slice.

pub mod error;

pub use error::*;

use crate::model::{MenuItem, MenuItemId};
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct MenuCatalog {
    items: Arc<[MenuItem]>,
}

impl MenuCatalog {
    /// Builds a catalog from `items`, keeping their order.
    ///
    /// # Panics
    /// Panics if two items share an id; a catalog with duplicate ids is a programming
    /// error in the seed data.
    pub fn new(items: Vec<MenuItem>) -> Self {
        let mut seen = BTreeSet::new();
        for item in &items {
            assert!(seen.insert(item.id), "duplicate menu item id {}", item.id);
        }
        Self {
            items: items.into(),
        }
    }

    /// The QuickBite house menu.
    pub fn quickbite() -> Self {
        Self::new(vec![
            MenuItem::new(1, "Classic Burger", "Beef patty with lettuce, tomato, and cheese", 12.99, "burgers"),
            MenuItem::new(2, "Chicken Caesar Salad", "Fresh romaine with grilled chicken and caesar dressing", 10.99, "salads"),
            MenuItem::new(3, "Margherita Pizza", "Fresh mozzarella, tomato sauce, and basil", 14.99, "pizza"),
            MenuItem::new(4, "Fish Tacos", "Grilled fish with cabbage slaw and chipotle mayo", 13.99, "tacos"),
            MenuItem::new(5, "Chocolate Brownie", "Rich chocolate brownie with vanilla ice cream", 6.99, "desserts"),
            MenuItem::new(6, "French Fries", "Crispy golden fries with sea salt", 4.99, "sides"),
            MenuItem::new(7, "Craft Beer", "Local IPA on tap", 5.99, "beverages"),
            MenuItem::new(8, "Iced Coffee", "Cold brew coffee with milk", 3.99, "beverages"),
        ])
    }

    /// All items, or the items whose category matches `category` case-insensitively.
    ///
    /// A filter that matches nothing is an error rather than an empty list.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<MenuItem>, CatalogError> {
        let Some(category) = category else {
            return Ok(self.items.to_vec());
        };

        let wanted = category.to_lowercase();
        let matching: Vec<MenuItem> = self
            .items
            .iter()
            .filter(|item| item.category.to_lowercase() == wanted)
            .cloned()
            .collect();

        if matching.is_empty() {
            return Err(CatalogError::EmptyCategory(category.to_string()));
        }
        Ok(matching)
    }

    pub fn get(&self, id: MenuItemId) -> Result<&MenuItem, CatalogError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CatalogError::ItemNotFound)
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| item.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        Self::quickbite()
    }
}
