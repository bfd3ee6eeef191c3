// Collection editor state machine

use crate::locks::{locked_description, locked_name, LockFlags};
use crate::models::{Collection, Item, ItemId, ItemMetadata, UploadedFile};

/// Minimum number of items before the collection can move to export
pub const MIN_COLLECTION_SIZE: usize = 5;

/// Why the collection cannot advance to the export step yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportGate {
    /// All conditions met
    Ready,

    /// Fewer than the minimum number of items
    TooFewItems,

    /// At least one item has not been saved
    UnsavedItems,

    /// At least one attribute value is empty or whitespace-only
    BlankAttributeValues,
}

/// Owned state of the collection editing step.
///
/// All mutation goes through the operation methods so the item attribute
/// lists stay aligned with the global attribute list.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEditor {
    collection: Collection,
    items: Vec<Item>,
    global_attributes: Vec<String>,
    use_collection_description: bool,
    locks: LockFlags,
}

impl CollectionEditor {
    /// Empty collection, both locks on, collection description reused for
    /// new items
    pub fn new() -> Self {
        Self {
            collection: Collection::default(),
            items: Vec::new(),
            global_attributes: Vec::new(),
            use_collection_description: true,
            locks: LockFlags::default(),
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn global_attributes(&self) -> &[String] {
        &self.global_attributes
    }

    pub fn locks(&self) -> LockFlags {
        self.locks
    }

    pub fn set_collection_name(&mut self, name: String) {
        self.collection.name = name;
    }

    pub fn set_collection_description(&mut self, description: String) {
        self.collection.description = description;
    }

    pub fn set_lock_names(&mut self, locked: bool) {
        self.locks.lock_names = locked;
    }

    pub fn set_lock_descriptions(&mut self, locked: bool) {
        self.locks.lock_descriptions = locked;
    }

    pub fn use_collection_description(&self) -> bool {
        self.use_collection_description
    }

    /// Controls whether newly added items copy the collection description
    pub fn set_use_collection_description(&mut self, enabled: bool) {
        self.use_collection_description = enabled;
    }

    /// Uploads and item editing stay disabled until the collection has both
    /// a name and a description
    pub fn can_add_images(&self) -> bool {
        !self.collection.name.is_empty() && !self.collection.description.is_empty()
    }

    /// Append one item per image file, in input order.
    ///
    /// Sequence numbers continue from the current item count, so they stay
    /// unique and dense across repeated uploads. Non-image files are
    /// dropped without shifting the numbering of the files behind them.
    /// Each new item starts unsaved, with a derived default name, the
    /// collection description (while that default is enabled), and one
    /// empty value per named global attribute.
    pub fn add_images(&mut self, files: Vec<UploadedFile>) {
        let mut sequence = self.items.len() as u32;
        for file in files.into_iter().filter(UploadedFile::is_image) {
            let mut metadata = ItemMetadata {
                name: locked_name(&self.collection, sequence),
                description: if self.use_collection_description {
                    self.collection.description.clone()
                } else {
                    String::new()
                },
                attributes: Vec::new(),
            };
            metadata.sync_attributes(&self.global_attributes);

            self.items.push(Item {
                id: ItemId::new(),
                sequence,
                image: file.object_url,
                metadata,
                saved: false,
            });
            sequence += 1;
        }
    }

    /// Append a blank global attribute entry. Items are untouched until it
    /// gets a name.
    pub fn add_global_attribute(&mut self) {
        self.global_attributes.push(String::new());
        self.sync_items();
    }

    /// Rename the global attribute at `index`. A renamed trait counts as a
    /// new one: per-item values recorded under the old name are dropped.
    pub fn update_global_attribute(&mut self, index: usize, value: String) {
        if let Some(slot) = self.global_attributes.get_mut(index) {
            *slot = value;
            self.sync_items();
        }
    }

    /// Remove the global attribute at `index` and its entries from every
    /// item.
    pub fn remove_global_attribute(&mut self, index: usize) {
        if index >= self.global_attributes.len() {
            return;
        }
        let removed = self.global_attributes.remove(index);
        for item in &mut self.items {
            item.metadata.attributes.retain(|attr| attr.trait_type != removed);
        }
        self.sync_items();
    }

    /// Replace one item's metadata and mark it saved. Unknown ids are
    /// ignored.
    pub fn update_item(&mut self, id: ItemId, metadata: ItemMetadata) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.metadata = metadata;
            item.saved = true;
        }
    }

    /// Mark every item saved, substituting the literal "null" for attribute
    /// values still empty. Whitespace-only values are left as they are.
    pub fn save_all(&mut self) {
        for item in &mut self.items {
            for attr in &mut item.metadata.attributes {
                if attr.value.is_empty() {
                    attr.value = "null".to_string();
                }
            }
            item.saved = true;
        }
    }

    /// First unmet export condition, checked in order: item count, saved
    /// flags, attribute values.
    pub fn export_gate(&self) -> ExportGate {
        if self.items.len() < MIN_COLLECTION_SIZE {
            return ExportGate::TooFewItems;
        }
        if self.items.iter().any(|item| !item.saved) {
            return ExportGate::UnsavedItems;
        }
        let all_filled = self.items.iter().all(|item| {
            item.metadata
                .attributes
                .iter()
                .all(|attr| !attr.value.trim().is_empty())
        });
        if !all_filled {
            return ExportGate::BlankAttributeValues;
        }
        ExportGate::Ready
    }

    pub fn ready_for_export(&self) -> bool {
        self.export_gate() == ExportGate::Ready
    }

    /// Name an item presents under the current lock state
    pub fn effective_name(&self, item: &Item) -> String {
        if self.locks.lock_names {
            locked_name(&self.collection, item.sequence)
        } else {
            item.metadata.name.clone()
        }
    }

    /// Description an item presents under the current lock state
    pub fn effective_description(&self, item: &Item) -> String {
        if self.locks.lock_descriptions {
            locked_description(&self.collection)
        } else {
            item.metadata.description.clone()
        }
    }

    /// Items with locked fields resolved to their derived values, ready to
    /// hand off to the export step. Exported names and descriptions come
    /// from this view, never from stored values a lock overrides.
    pub fn snapshot_items(&self) -> Vec<Item> {
        self.items
            .iter()
            .map(|item| {
                let mut snapshot = item.clone();
                snapshot.metadata.name = self.effective_name(item);
                snapshot.metadata.description = self.effective_description(item);
                snapshot
            })
            .collect()
    }

    /// Realign every item's attributes with the global list
    fn sync_items(&mut self) {
        for item in &mut self.items {
            item.metadata.sync_attributes(&self.global_attributes);
        }
    }
}

impl Default for CollectionEditor {
    fn default() -> Self {
        Self::new()
    }
}
