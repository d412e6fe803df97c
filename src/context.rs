//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Warning from the initial storage load, if any - read
    pub storage_notice: ReadSignal<Option<String>>,
    /// Warning from the initial storage load - write
    set_storage_notice: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(storage_notice: (ReadSignal<Option<String>>, WriteSignal<Option<String>>)) -> Self {
        Self {
            storage_notice: storage_notice.0,
            set_storage_notice: storage_notice.1,
        }
    }

    /// Clear the storage warning banner
    pub fn dismiss_notice(&self) {
        self.set_storage_notice.set(None);
    }
}
