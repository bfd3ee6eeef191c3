// In-memory backend

use std::cell::RefCell;
use std::collections::HashMap;

use lilipad_core::{Collection, Item};

use super::{SessionBackend, SessionError, ITEMS_KEY, META_KEY};

/// In-memory backend holding the same JSON payloads the browser backend
/// writes. Used by native tests and anywhere a browser store is unwanted.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionBackend for MemoryBackend {
    fn write_items(&self, items: &[Item]) -> Result<(), SessionError> {
        let json = serde_json::to_string(items)?;
        self.entries.borrow_mut().insert(ITEMS_KEY.to_string(), json);
        Ok(())
    }

    fn read_items(&self) -> Option<Vec<Item>> {
        let entries = self.entries.borrow();
        let json = entries.get(ITEMS_KEY)?;
        serde_json::from_str(json).ok()
    }

    fn write_collection(&self, collection: &Collection) -> Result<(), SessionError> {
        let json = serde_json::to_string(collection)?;
        self.entries.borrow_mut().insert(META_KEY.to_string(), json);
        Ok(())
    }

    fn read_collection(&self) -> Option<Collection> {
        let entries = self.entries.borrow();
        let json = entries.get(META_KEY)?;
        serde_json::from_str(json).ok()
    }

    fn clear(&self) {
        let mut entries = self.entries.borrow_mut();
        entries.remove(ITEMS_KEY);
        entries.remove(META_KEY);
    }
}
