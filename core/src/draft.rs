// Copy-edit-commit transaction for the item detail editor

use crate::locks::{locked_description, locked_name, LockFlags};
use crate::models::{Collection, Item, ItemId, ItemMetadata};

/// Working copy of one item's metadata.
///
/// Opened from a committed item, mutated freely, then either committed back
/// or dropped. Nothing touches the committed item until `commit`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    item_id: ItemId,
    sequence: u32,
    metadata: ItemMetadata,
}

impl ItemDraft {
    /// Start a transaction on `item` by copying its metadata
    pub fn open(item: &Item) -> Self {
        Self {
            item_id: item.id,
            sequence: item.sequence,
            metadata: item.metadata.clone(),
        }
    }

    pub fn item_id(&self) -> ItemId {
        self.item_id
    }

    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn metadata(&self) -> &ItemMetadata {
        &self.metadata
    }

    /// Effective only while names are unlocked
    pub fn set_name(&mut self, name: String) {
        self.metadata.name = name;
    }

    /// Effective only while descriptions are unlocked
    pub fn set_description(&mut self, description: String) {
        self.metadata.description = description;
    }

    /// Set the value of the attribute at `index`. Out-of-range indexes are
    /// ignored.
    pub fn set_attribute_value(&mut self, index: usize, value: String) {
        if let Some(attr) = self.metadata.attributes.get_mut(index) {
            attr.value = value;
        }
    }

    /// Remove the attribute at `index` from this working copy only. The
    /// global attribute list is not consulted, so a global sync that runs
    /// later puts the trait back with an empty value.
    pub fn remove_attribute(&mut self, index: usize) {
        if index < self.metadata.attributes.len() {
            self.metadata.attributes.remove(index);
        }
    }

    /// Realign the working copy with the global attribute list while the
    /// editor is open
    pub fn sync_globals(&mut self, global_attributes: &[String]) {
        self.metadata.sync_attributes(global_attributes);
    }

    /// Name shown in the editor: derived while locked, working copy
    /// otherwise
    pub fn display_name(&self, locks: LockFlags, collection: &Collection) -> String {
        if locks.lock_names {
            locked_name(collection, self.sequence)
        } else {
            self.metadata.name.clone()
        }
    }

    /// Description shown in the editor
    pub fn display_description(&self, locks: LockFlags, collection: &Collection) -> String {
        if locks.lock_descriptions {
            locked_description(collection)
        } else {
            self.metadata.description.clone()
        }
    }

    /// Close the transaction, resolving locked fields to their derived
    /// values. The result is what `CollectionEditor::update_item` stores.
    pub fn commit(self, locks: LockFlags, collection: &Collection) -> (ItemId, ItemMetadata) {
        let mut metadata = self.metadata;
        if locks.lock_names {
            metadata.name = locked_name(collection, self.sequence);
        }
        if locks.lock_descriptions {
            metadata.description = locked_description(collection);
        }
        (self.item_id, metadata)
    }
}
