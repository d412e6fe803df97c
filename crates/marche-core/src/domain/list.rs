//! Shopping List Entity
//!
//! The aggregate being edited: a named sequence of priced items with a
//! budget ceiling and creation/modification timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{remove_by_id, DomainError, DomainResult, Entity};
use super::item::ListItem;

/// Name given to a freshly created list
pub const DEFAULT_LIST_NAME: &str = "Nouvelle liste";

/// Suffix appended to the name of a cloned list
const CLONE_SUFFIX: &str = "copie";

/// Backfill value for timestamps missing in older saved data
fn now() -> DateTime<Utc> {
    Utc::now()
}

/// A named shopping list with a spending ceiling
///
/// `budget_max` of 0 means "no budget set". `updated_at` is refreshed on
/// every mutation of the record or its items and never moves backwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Unique identifier within the saved collection
    pub id: u32,
    /// Display name
    pub name: String,
    /// Items in insertion order
    #[serde(default)]
    pub items: Vec<ListItem>,
    /// Spending ceiling; 0 disables budget tracking
    #[serde(default)]
    pub budget_max: f64,
    #[serde(default = "now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "now")]
    pub updated_at: DateTime<Utc>,
}

impl ShoppingList {
    /// Create an empty list with both timestamps set to now
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        let ts = Utc::now();
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
            budget_max: 0.0,
            created_at: ts,
            updated_at: ts,
        }
    }

    /// Fresh blank list, used after the edited list was deleted
    pub fn blank(id: u32) -> Self {
        Self::new(id, DEFAULT_LIST_NAME)
    }

    /// Refresh `updated_at`, never moving it backwards
    pub fn touch(&mut self) {
        let ts = Utc::now();
        if ts > self.updated_at {
            self.updated_at = ts;
        }
    }

    fn next_item_id(&self) -> u32 {
        self.items.iter().map(|i| i.id).max().unwrap_or(0) + 1
    }

    /// Append a new unpurchased item
    ///
    /// Rejected without mutating state when the text trims to empty or the
    /// price is negative or not a finite number.
    pub fn add_item(&mut self, text: &str, price: f64) -> DomainResult<()> {
        if text.trim().is_empty() {
            return Err(DomainError::InvalidInput("item text is empty".into()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(DomainError::InvalidInput(format!("invalid price: {price}")));
        }
        let item = ListItem::new(self.next_item_id(), text.to_string(), price);
        self.items.push(item);
        self.touch();
        Ok(())
    }

    /// Flip the purchased flag of the matching item
    pub fn toggle_item(&mut self, item_id: u32) -> DomainResult<()> {
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.purchased = !item.purchased;
                self.touch();
                Ok(())
            }
            None => Err(DomainError::NotFound(format!("item {item_id}"))),
        }
    }

    /// Remove the matching item
    pub fn delete_item(&mut self, item_id: u32) -> DomainResult<()> {
        if !remove_by_id(&mut self.items, item_id) {
            return Err(DomainError::NotFound(format!("item {item_id}")));
        }
        self.touch();
        Ok(())
    }

    /// Set the spending ceiling
    ///
    /// Negative, NaN or infinite input is treated as "no budget" (0).
    pub fn set_budget_max(&mut self, value: f64) {
        self.budget_max = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        self.touch();
    }

    /// Replace the display name; empty-trimmed names are rejected
    pub fn rename(&mut self, new_name: &str) -> DomainResult<()> {
        if new_name.trim().is_empty() {
            return Err(DomainError::InvalidInput("list name is empty".into()));
        }
        self.name = new_name.to_string();
        self.touch();
        Ok(())
    }

    /// Produce a new list copying this one's items and budget
    ///
    /// The clone gets fresh timestamps, every item copied with a fresh id
    /// (numbered past this list's highest id) and `purchased` reset.
    pub fn duplicate(&self, new_id: u32, new_name: &str) -> DomainResult<ShoppingList> {
        if new_name.trim().is_empty() {
            return Err(DomainError::InvalidInput("list name is empty".into()));
        }
        let base = self.items.iter().map(|i| i.id).max().unwrap_or(0);
        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(n, src)| ListItem::new(base + 1 + n as u32, src.text.clone(), src.price))
            .collect();
        let ts = Utc::now();
        Ok(ShoppingList {
            id: new_id,
            name: format!("{new_name} {CLONE_SUFFIX}"),
            items,
            budget_max: self.budget_max,
            created_at: ts,
            updated_at: ts,
        })
    }
}

impl Entity for ShoppingList {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Next unique list id given every id currently known
///
/// The unsaved list being edited counts as known, so a clone can never
/// collide with it.
pub fn next_list_id<I>(known: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    known.into_iter().max().unwrap_or(0) + 1
}

/// Saved lists most recently touched first; ties keep their stored order
pub fn sorted_by_recency(lists: &[ShoppingList]) -> Vec<ShoppingList> {
    let mut sorted = lists.to_vec();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
}
