//! Delete Confirm Button Component
//!
//! Inline two-step deletion: a × button that asks for confirmation before
//! running the destructive action.

use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        {move || if armed.get() {
            view! {
                <span class="delete-confirm" on:click=move |ev| ev.stop_propagation()>
                    <span class="delete-confirm-text">"Supprimer ?"</span>
                    <button class="confirm-btn" on:click=move |_| on_confirm.run(())>
                        "Oui"
                    </button>
                    <button class="cancel-btn" on:click=move |_| set_armed.set(false)>
                        "Non"
                    </button>
                </span>
            }.into_any()
        } else {
            let class = button_class.clone();
            view! {
                <button
                    class=class
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(true);
                    }
                >
                    "×"
                </button>
            }.into_any()
        }}
    }
}
