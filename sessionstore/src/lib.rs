// Session hand-off store for the Lilipad collection wizard
//
// This crate provides the snapshot channel between the editing step and the
// export step, with pluggable backends

use lilipad_core::{Collection, Item};

pub mod local;
pub mod memory;
pub use local::LocalStorageBackend;
pub use memory::MemoryBackend;

/// Key holding the committed item array (JSON)
pub const ITEMS_KEY: &str = "collection-items";

/// Key holding the committed collection fields (JSON)
pub const META_KEY: &str = "collection-meta";

/// Session hand-off errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to encode session snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write session snapshot: {0}")]
    Write(String),
}

/// Snapshot backend trait
pub trait SessionBackend {
    fn write_items(&self, items: &[Item]) -> Result<(), SessionError>;
    fn read_items(&self) -> Option<Vec<Item>>;
    fn write_collection(&self, collection: &Collection) -> Result<(), SessionError>;
    fn read_collection(&self) -> Option<Collection>;
    fn clear(&self);
}

/// Session store with pluggable backend.
///
/// The editing step commits a snapshot exactly once when it hands off to the
/// export step; the export step loads it once and clears it when the user
/// returns to editing. The two steps never share live state.
pub struct SessionStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Persist the committed snapshot, items first
    pub fn commit(&self, items: &[Item], collection: &Collection) -> Result<(), SessionError> {
        self.backend.write_items(items)?;
        self.backend.write_collection(collection)
    }

    /// Read the snapshot back. Each missing or unreadable piece falls back
    /// to its empty default, so a fresh session loads as an empty
    /// collection rather than an error.
    pub fn load(&self) -> (Vec<Item>, Collection) {
        let items = self.backend.read_items().unwrap_or_default();
        let collection = self.backend.read_collection().unwrap_or_default();
        (items, collection)
    }

    /// Drop the snapshot
    pub fn clear(&self) {
        self.backend.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lilipad_core::{Attribute, ItemId, ItemMetadata};

    fn sample_items() -> Vec<Item> {
        (0..2)
            .map(|sequence| Item {
                id: ItemId::new(),
                sequence,
                image: format!("blob:img-{}", sequence),
                metadata: ItemMetadata {
                    name: format!("Frogs #{}", sequence),
                    description: "A pond of frogs".to_string(),
                    attributes: vec![Attribute {
                        trait_type: "Background".to_string(),
                        value: "Green".to_string(),
                    }],
                },
                saved: true,
            })
            .collect()
    }

    fn sample_collection() -> Collection {
        Collection {
            name: "Frogs".to_string(),
            description: "A pond of frogs".to_string(),
        }
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(ITEMS_KEY, "collection-items");
        assert_eq!(META_KEY, "collection-meta");
    }

    #[test]
    fn test_commit_then_load_roundtrip() {
        let store = SessionStore::new(MemoryBackend::new());
        let items = sample_items();
        let collection = sample_collection();

        store.commit(&items, &collection).unwrap();
        let (loaded_items, loaded_collection) = store.load();

        assert_eq!(loaded_items, items);
        assert_eq!(loaded_collection, collection);
    }

    #[test]
    fn test_fresh_store_loads_empty_collection() {
        let store = SessionStore::new(MemoryBackend::new());
        let (items, collection) = store.load();

        assert!(items.is_empty());
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_clear_drops_snapshot() {
        let store = SessionStore::new(MemoryBackend::new());
        store.commit(&sample_items(), &sample_collection()).unwrap();
        store.clear();

        let (items, collection) = store.load();
        assert!(items.is_empty());
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_items_load_even_without_collection_fields() {
        let backend = MemoryBackend::new();
        backend.write_items(&sample_items()).unwrap();

        let store = SessionStore::new(backend);
        let (items, collection) = store.load();

        assert_eq!(items.len(), 2);
        assert_eq!(collection, Collection::default());
    }

    #[test]
    fn test_recommit_replaces_previous_snapshot() {
        let store = SessionStore::new(MemoryBackend::new());
        store.commit(&sample_items(), &sample_collection()).unwrap();

        let fewer = vec![sample_items().remove(0)];
        store
            .commit(
                &fewer,
                &Collection {
                    name: "Toads".to_string(),
                    description: String::new(),
                },
            )
            .unwrap();

        let (items, collection) = store.load();
        assert_eq!(items.len(), 1);
        assert_eq!(collection.name, "Toads");
    }
}
