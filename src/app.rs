//! Liste Marché Frontend App
//!
//! Main application component: loads the saved collection, wires the
//! reactive store and writes every collection change back to storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    BudgetPanel, CloneListForm, FilterBar, ItemList, ListNameEditor, NewItemForm, SavedListsPanel,
};
use crate::context::AppContext;
use crate::storage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // localStorage is synchronous, so the collection is loaded during setup
    let (initial_lists, load_notice) = storage::load_lists();
    web_sys::console::log_1(&format!("[APP] Loaded {} saved lists", initial_lists.len()).into());
    let store = Store::new(AppState::new(initial_lists));
    let (storage_notice, set_storage_notice) = signal(load_notice);

    // Provide context to all children
    let ctx = AppContext::new((storage_notice, set_storage_notice));
    provide_context(store);
    provide_context(ctx);

    // Write the whole collection back after every change to it.
    // Edits to the current list alone do not persist; saving does.
    Effect::new(move |_| {
        let lists = store.lists().get();
        storage::persist_lists(&lists);
    });

    view! {
        <div class="liste-marche-container">
            <h1>"Gestion des Listes de Marché"</h1>

            {move || storage_notice.get().map(|notice| view! {
                <div class="storage-notice">
                    <span>{notice}</span>
                    <button on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            })}

            <BudgetPanel />

            <div class="lists-management">
                <SavedListsPanel />

                <div class="current-list">
                    <ListNameEditor />
                    <NewItemForm />
                    <FilterBar />
                    <ItemList />
                    <CloneListForm />
                </div>
            </div>
        </div>
    }
}
