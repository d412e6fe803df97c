//! Budget Panel Component
//!
//! Budget ceiling input plus the derived spending readouts. The panel
//! turns into a warning state while a non-zero budget is exceeded.

use leptos::prelude::*;

use marche_core::BudgetStatus;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BudgetPanel() -> impl IntoView {
    let store = use_app_store();

    // Recomputed on every relevant change, never stored
    let budget = Memo::new(move |_| BudgetStatus::evaluate(&store.current().read()));

    let on_budget_input = move |ev| {
        let value = event_target_value(&ev).parse::<f64>().unwrap_or(f64::NAN);
        store.current().write().set_budget_max(value);
    };

    let section_class = move || {
        if budget.get().over_budget {
            "budget-section budget-error"
        } else {
            "budget-section"
        }
    };

    view! {
        <div class=section_class>
            <label>
                "Budget Max:"
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    prop:value=move || store.current().read().budget_max.to_string()
                    on:input=on_budget_input
                />
            </label>
            <div class="budget-info">
                <span>{move || format!("Total dépensé: {:.2}Fcfa", budget.get().total_spent)}</span>
                <span>{move || format!("Reste: {:.2}Fcfa", budget.get().remaining)}</span>
                <Show when=move || budget.get().over_budget>
                    <div class="error-message">
                        "Attention! Vous avez dépassé votre budget!"
                    </div>
                </Show>
            </div>
        </div>
    }
}
