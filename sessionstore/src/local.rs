// LocalStorage backend implementation

use lilipad_core::{Collection, Item};

use super::{SessionBackend, SessionError};

/// LocalStorage backend carrying the snapshot across wizard stages in the
/// browser
#[derive(Default)]
pub struct LocalStorageBackend;

impl LocalStorageBackend {
    pub fn new() -> Self {
        Self
    }
}

// WASM implementation using gloo-storage
#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use super::*;
    use crate::{ITEMS_KEY, META_KEY};
    use gloo_storage::{LocalStorage, Storage};

    impl SessionBackend for LocalStorageBackend {
        fn write_items(&self, items: &[Item]) -> Result<(), SessionError> {
            LocalStorage::set(ITEMS_KEY, items).map_err(|err| SessionError::Write(err.to_string()))
        }

        fn read_items(&self) -> Option<Vec<Item>> {
            LocalStorage::get::<Vec<Item>>(ITEMS_KEY).ok()
        }

        fn write_collection(&self, collection: &Collection) -> Result<(), SessionError> {
            LocalStorage::set(META_KEY, collection)
                .map_err(|err| SessionError::Write(err.to_string()))
        }

        fn read_collection(&self) -> Option<Collection> {
            LocalStorage::get::<Collection>(META_KEY).ok()
        }

        fn clear(&self) {
            LocalStorage::delete(ITEMS_KEY);
            LocalStorage::delete(META_KEY);
        }
    }
}

// Stub implementation for non-WASM targets (for compilation purposes)
#[cfg(not(target_arch = "wasm32"))]
impl SessionBackend for LocalStorageBackend {
    fn write_items(&self, _items: &[Item]) -> Result<(), SessionError> {
        panic!("LocalStorageBackend is only available on WASM targets")
    }

    fn read_items(&self) -> Option<Vec<Item>> {
        panic!("LocalStorageBackend is only available on WASM targets")
    }

    fn write_collection(&self, _collection: &Collection) -> Result<(), SessionError> {
        panic!("LocalStorageBackend is only available on WASM targets")
    }

    fn read_collection(&self) -> Option<Collection> {
        panic!("LocalStorageBackend is only available on WASM targets")
    }

    fn clear(&self) {
        panic!("LocalStorageBackend is only available on WASM targets")
    }
}
