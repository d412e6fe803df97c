//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use marche_core::domain::{next_list_id, remove_by_id, sorted_by_recency, upsert_by_id};
use marche_core::{ItemFilter, ShoppingList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Saved lists, in stored order
    pub lists: Vec<ShoppingList>,
    /// The list being edited (not necessarily saved yet)
    pub current: ShoppingList,
    /// Which items of the edited list are shown
    pub filter: ItemFilter,
}

impl AppState {
    /// Start from the loaded collection, editing the most recently touched
    /// list, or a fresh blank one when nothing is saved yet
    pub fn new(lists: Vec<ShoppingList>) -> Self {
        let current = sorted_by_recency(&lists)
            .into_iter()
            .next()
            .unwrap_or_else(|| ShoppingList::blank(next_list_id(lists.iter().map(|l| l.id))));
        Self {
            lists,
            current,
            filter: ItemFilter::All,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Merge the edited list into the saved collection (save / update action)
pub fn store_save_current(store: &AppStore) {
    let mut list = store.current().get();
    list.touch();
    store.current().set(list.clone());
    upsert_by_id(&mut store.lists().write(), list);
}

/// Load a saved list into the editor
pub fn store_select_list(store: &AppStore, id: u32) {
    let selected = store.lists().read().iter().find(|l| l.id == id).cloned();
    if let Some(list) = selected {
        store.current().set(list);
    }
}

/// Remove a saved list; a deleted edited list is replaced with a blank one
pub fn store_remove_list(store: &AppStore, id: u32) {
    remove_by_id(&mut store.lists().write(), id);
    let was_current = store.current().read().id == id;
    if was_current {
        let fresh_id = next_list_id(store.lists().read().iter().map(|l| l.id));
        store.current().set(ShoppingList::blank(fresh_id));
    }
}

/// Clone the edited list under a new name and switch to the clone
///
/// The clone joins the saved collection right away, so it is persisted by
/// the save-on-change effect without a separate save.
pub fn store_clone_current(store: &AppStore, name: &str) -> bool {
    let new_id = {
        let current_id = store.current().read().id;
        next_list_id(
            store
                .lists()
                .read()
                .iter()
                .map(|l| l.id)
                .chain([current_id]),
        )
    };
    let clone = match store.current().read().duplicate(new_id, name) {
        Ok(clone) => clone,
        Err(_) => return false,
    };
    store.lists().write().push(clone.clone());
    store.current().set(clone);
    true
}
