//! New Item Form Component
//!
//! Pending-item inputs for the edited list. Submitting with Enter or the
//! button appends the item; invalid input leaves everything untouched.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());
    let (new_price, set_new_price) = signal(String::from("0"));

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let price = new_price.get().trim().parse::<f64>().unwrap_or(f64::NAN);

        if store.current().write().add_item(&text, price).is_ok() {
            set_new_text.set(String::new());
            set_new_price.set(String::from("0"));
        }
    };

    view! {
        <form class="add-item" on:submit=add_item>
            <input
                type="text"
                placeholder="Nom de l'article"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <input
                type="number"
                placeholder="Prix"
                min="0"
                step="0.01"
                prop:value=move || new_price.get()
                on:input=move |ev| set_new_price.set(event_target_value(&ev))
            />
            <button type="submit">"Ajouter"</button>
        </form>
    }
}
