//! Item Filter
//!
//! Pure selection over a list's items, preserving insertion order.

use super::item::ListItem;

/// Which items of the edited list are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemFilter {
    #[default]
    All,
    Purchased,
    Unpurchased,
}

impl ItemFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemFilter::All => "all",
            ItemFilter::Purchased => "purchased",
            ItemFilter::Unpurchased => "unpurchased",
        }
    }

    /// Unknown modes fall back to `All`
    pub fn from_str(s: &str) -> Self {
        match s {
            "purchased" => ItemFilter::Purchased,
            "unpurchased" => ItemFilter::Unpurchased,
            _ => ItemFilter::All,
        }
    }

    pub fn matches(&self, item: &ListItem) -> bool {
        match self {
            ItemFilter::All => true,
            ItemFilter::Purchased => item.purchased,
            ItemFilter::Unpurchased => !item.purchased,
        }
    }

    /// Matching items in their original order
    pub fn apply(&self, items: &[ListItem]) -> Vec<ListItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}
