//! Saved Lists Panel Component
//!
//! Sidebar of saved lists, most recently touched first, with selection,
//! deletion and the save/update action for the edited list.

use leptos::prelude::*;

use marche_core::domain::sorted_by_recency;

use crate::components::{format_date, DeleteConfirmButton};
use crate::store::{
    store_remove_list, store_save_current, store_select_list, use_app_store, AppStateStoreFields,
};

#[component]
pub fn SavedListsPanel() -> impl IntoView {
    let store = use_app_store();

    let save_label = move || {
        let current_id = store.current().read().id;
        if store.lists().read().iter().any(|l| l.id == current_id) {
            "Mettre à jour"
        } else {
            "Sauvegarder"
        }
    };

    view! {
        <div class="saved-lists">
            <h3>"Listes sauvegardées"</h3>
            <ul>
                <For
                    each=move || sorted_by_recency(&store.lists().get())
                    key=|list| (list.id, list.updated_at)
                    children=move |list| {
                        let id = list.id;
                        let item_count = list.items.len();
                        let updated = format_date(&list.updated_at);
                        let row_class = move || {
                            if store.current().read().id == id { "active" } else { "" }
                        };

                        view! {
                            <li class=row_class on:click=move |_| store_select_list(&store, id)>
                                <div class="list-header">
                                    <strong>{list.name.clone()}</strong>
                                    <DeleteConfirmButton
                                        button_class="delete-list-btn"
                                        on_confirm=move |_| store_remove_list(&store, id)
                                    />
                                </div>
                                <div class="list-meta">
                                    <span>{format!("{item_count} Articles")}</span>
                                    <span>{updated}</span>
                                </div>
                            </li>
                        }
                    }
                />
            </ul>
            <button class="save-list-btn" on:click=move |_| store_save_current(&store)>
                {save_label}
            </button>
        </div>
    }
}
