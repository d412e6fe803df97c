//! Storage Layer
//!
//! Persists the whole list collection as one serialized blob under a fixed
//! key. Implementations can use browser localStorage, in-memory, etc.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{next_list_id, remove_by_id, upsert_by_id, ShoppingList};


/// Fixed key the whole collection is stored under
pub const STORAGE_KEY: &str = "marketLists";

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backend read or write itself failed
    Backend(String),
    /// A persisted blob exists but does not parse
    Corrupt(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Backend(msg) => write!(f, "Storage backend error: {}", msg),
            StorageError::Corrupt(msg) => write!(f, "Corrupt saved data: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Raw key-value persistence the list store writes through
///
/// The seam for test doubles: the store never touches the browser directly.
pub trait StorageBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}

/// In-memory backend for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Serialize the full collection into the persisted blob
pub fn encode_lists(lists: &[ShoppingList]) -> StorageResult<String> {
    serde_json::to_string(lists).map_err(|e| StorageError::Backend(e.to_string()))
}

/// Decode the persisted blob
///
/// Records saved by older versions may lack timestamps; serde backfills
/// those with the current time, and a backfill that left `updated_at`
/// behind `created_at` is clamped. One-way, non-destructive migration.
pub fn decode_lists(raw: &str) -> StorageResult<Vec<ShoppingList>> {
    let mut lists: Vec<ShoppingList> =
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt(e.to_string()))?;
    for list in &mut lists {
        if list.updated_at < list.created_at {
            log::warn!(
                "list {} had updated_at before created_at, clamping after migration",
                list.id
            );
            list.updated_at = list.created_at;
        }
    }
    Ok(lists)
}

/// Read and decode the saved collection from a backend; absent data is empty
pub fn load_from<B: StorageBackend>(backend: &B) -> StorageResult<Vec<ShoppingList>> {
    match backend.read(STORAGE_KEY)? {
        Some(raw) => decode_lists(&raw),
        None => Ok(Vec::new()),
    }
}

/// Encode and write the whole collection through a backend (full overwrite)
pub fn save_to<B: StorageBackend>(backend: &B, lists: &[ShoppingList]) -> StorageResult<()> {
    let blob = encode_lists(lists)?;
    backend.write(STORAGE_KEY, &blob)
}

/// Owns the saved collection and writes it through on every change
#[derive(Debug)]
pub struct ListStore<B: StorageBackend> {
    backend: B,
    lists: Vec<ShoppingList>,
}

impl<B: StorageBackend> ListStore<B> {
    /// Load the persisted collection; absent data starts an empty store
    pub fn load(backend: B) -> StorageResult<Self> {
        let lists = load_from(&backend)?;
        Ok(Self { backend, lists })
    }

    /// Start empty without reading the backend (fallback after a corrupt read)
    pub fn empty(backend: B) -> Self {
        Self {
            backend,
            lists: Vec::new(),
        }
    }

    /// Saved lists in stored order
    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn get(&self, id: u32) -> Option<&ShoppingList> {
        self.lists.iter().find(|l| l.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    /// Next unique id for a list created alongside this store
    pub fn next_id(&self) -> u32 {
        next_list_id(self.lists.iter().map(|l| l.id))
    }

    /// Insert or replace by id, then persist the whole collection
    pub fn upsert(&mut self, list: ShoppingList) -> StorageResult<()> {
        upsert_by_id(&mut self.lists, list);
        self.persist()
    }

    /// Remove by id, then persist; unknown ids leave the store untouched
    pub fn remove(&mut self, id: u32) -> StorageResult<bool> {
        if !remove_by_id(&mut self.lists, id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Write the whole collection through the backend
    pub fn persist(&self) -> StorageResult<()> {
        save_to(&self.backend, &self.lists)
    }
}
