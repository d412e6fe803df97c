//! Liste Marché Core
//!
//! Layered architecture:
//! - domain: list and item entities, budget evaluation, filters
//! - storage: persistence of the whole collection behind a backend trait

pub mod domain;
pub mod storage;

pub use domain::{BudgetStatus, ItemFilter, ListItem, ShoppingList};
pub use storage::{ListStore, MemoryBackend, StorageBackend, StorageError, STORAGE_KEY};
