//! Clone List Form Component
//!
//! Creates a new list from the edited one: same budget, items copied with
//! purchases reset. The clone becomes the edited list.

use leptos::prelude::*;

use crate::store::{store_clone_current, use_app_store};

#[component]
pub fn CloneListForm() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());

    let clone_list = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_clone_current(&store, &new_name.get()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="new-list-from-current" on:submit=clone_list>
            <input
                type="text"
                placeholder="Nom de la nouvelle liste"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">
                "Créer une nouvelle liste à partir de celle-ci"
            </button>
        </form>
    }
}
