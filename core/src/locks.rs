// Derivation rules for locked item fields

use crate::models::Collection;

/// Session-wide switches that pin item fields to their derived values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockFlags {
    /// Item names follow "{collection name} #{sequence}"
    pub lock_names: bool,

    /// Item descriptions follow the collection description
    pub lock_descriptions: bool,
}

impl Default for LockFlags {
    /// Both locks start enabled
    fn default() -> Self {
        Self {
            lock_names: true,
            lock_descriptions: true,
        }
    }
}

/// Derived item name: "{collection name} #{sequence}", or "#{sequence}"
/// when the collection has no name yet.
///
/// The same rule seeds the default name when images are added.
pub fn locked_name(collection: &Collection, sequence: u32) -> String {
    if collection.name.is_empty() {
        format!("#{}", sequence)
    } else {
        format!("{} #{}", collection.name, sequence)
    }
}

/// Derived item description: the collection description verbatim.
pub fn locked_description(collection: &Collection) -> String {
    collection.description.clone()
}
