//! List Item Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single priced entry of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Unique identifier within the owning list
    pub id: u32,
    /// Display label
    pub text: String,
    /// Unit price, always finite and >= 0
    pub price: f64,
    /// Whether the item has been bought
    #[serde(default)]
    pub purchased: bool,
}

impl ListItem {
    /// Create a new, not-yet-purchased item
    pub fn new(id: u32, text: String, price: f64) -> Self {
        Self {
            id,
            text,
            price,
            purchased: false,
        }
    }
}

impl Entity for ListItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}
