use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{Result, StoreError};
use crate::types::Note;

/// A string key/value slot, the shape of `window.localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// `window.localStorage` of the current page.
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("window not available".into()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage is disabled".into()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// Process-local storage. Clones share the same slots.
#[derive(Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.slots.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Opens local storage, falling back to memory when the browser refuses it.
pub fn open_default_store() -> Rc<dyn KeyValueStore> {
    match BrowserStorage::open() {
        Ok(storage) => Rc::new(storage),
        Err(e) => {
            log::warn!("{}; notes will not survive a reload", e);
            Rc::new(MemoryStore::new())
        }
    }
}

/// Reads the notes collection. An absent key is an empty collection.
pub fn read_notes(store: &dyn KeyValueStore, key: &str) -> Result<Vec<Note>> {
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Parse),
        None => Ok(Vec::new()),
    }
}

/// Serializes and writes the whole collection.
pub fn write_notes(store: &dyn KeyValueStore, key: &str, notes: &[Note]) -> Result<()> {
    let raw = serde_json::to_string(notes).map_err(StoreError::Serialize)?;
    store.set(key, &raw)
}
