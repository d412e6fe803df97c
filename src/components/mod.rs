//! UI Components
//!
//! Reusable Leptos components.

mod budget_panel;
mod clone_list_form;
mod delete_confirm_button;
mod filter_bar;
mod item_list;
mod list_name_editor;
mod new_item_form;
mod saved_lists;

pub use budget_panel::BudgetPanel;
pub use clone_list_form::CloneListForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use item_list::ItemList;
pub use list_name_editor::ListNameEditor;
pub use new_item_form::NewItemForm;
pub use saved_lists::SavedListsPanel;

use chrono::{DateTime, Utc};

/// dd/mm/yyyy hh:mm, the fr-FR display format the app uses throughout
pub(crate) fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%d/%m/%Y %H:%M").to_string()
}
