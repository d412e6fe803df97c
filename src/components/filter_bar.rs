//! Filter Bar Component
//!
//! Buttons selecting which items of the edited list are shown.

use leptos::prelude::*;

use marche_core::ItemFilter;

use crate::store::{use_app_store, AppStateStoreFields};

/// Filter options with their display labels
const FILTERS: &[(ItemFilter, &str)] = &[
    (ItemFilter::All, "Tous"),
    (ItemFilter::Purchased, "Achetés"),
    (ItemFilter::Unpurchased, "Non achetés"),
];

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filters">
            {FILTERS.iter().map(|(mode, label)| {
                let mode = *mode;
                let is_active = move || store.filter().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "active" } else { "" }
                        on:click=move |_| store.filter().set(mode)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
