//! List Name Editor Component
//!
//! The edited list's title with edit-in-place: click to edit, commit on
//! blur or Enter. Empty names are ignored. Also shows the list's dates.

use leptos::prelude::*;

use crate::components::format_date;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListNameEditor() -> impl IntoView {
    let store = use_app_store();

    let (editing, set_editing) = signal(false);
    let (temp_name, set_temp_name) = signal(String::new());

    let start_editing = move |_| {
        set_temp_name.set(store.current().read().name.clone());
        set_editing.set(true);
    };

    // Empty names are silently rejected by the domain layer
    let commit_name = move || {
        let _ = store.current().write().rename(&temp_name.get());
        set_editing.set(false);
    };

    view! {
        {move || if editing.get() {
            view! {
                <div class="list-name-edit">
                    <input
                        type="text"
                        prop:value=move || temp_name.get()
                        on:input=move |ev| set_temp_name.set(event_target_value(&ev))
                        on:blur=move |_| commit_name()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                commit_name();
                            }
                        }
                        autofocus=true
                    />
                    <button on:click=move |_| commit_name()>"✓"</button>
                </div>
            }.into_any()
        } else {
            view! {
                <h2 on:click=start_editing>
                    {move || store.current().read().name.clone()}
                    <span class="edit-icon">"✏️"</span>
                </h2>
            }.into_any()
        }}

        <div class="list-dates">
            <span>{move || format!("Créée le: {}", format_date(&store.current().read().created_at))}</span>
            <span>{move || format!("Modifiée le: {}", format_date(&store.current().read().updated_at))}</span>
        </div>
    }
}
