//! Item List Component
//!
//! Filtered items of the edited list. Clicking an item's label toggles its
//! purchased state, the button next to it removes the item.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let filtered = Memo::new(move |_| {
        let filter = store.filter().get();
        let current = store.current().get();
        filter.apply(&current.items)
    });

    view! {
        <ul class="items-list">
            <For
                each=move || filtered.get()
                key=|item| (item.id, item.purchased)
                children=move |item| {
                    let id = item.id;
                    let label = format!("{} - {:.2}€", item.text, item.price);
                    let row_class = if item.purchased { "achete" } else { "" };

                    view! {
                        <li class=row_class>
                            <span on:click=move |_| {
                                let _ = store.current().write().toggle_item(id);
                            }>
                                {label}
                            </span>
                            <button
                                class="delete-btn"
                                on:click=move |_| {
                                    let _ = store.current().write().delete_item(id);
                                }
                            >
                                "Supprimer"
                            </button>
                        </li>
                    }
                }
            />
            <Show when=move || filtered.get().is_empty()>
                <p>"Aucun article dans la liste"</p>
            </Show>
        </ul>
    }
}
