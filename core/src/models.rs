// Core data models for the Lilipad collection wizard

use serde::{Deserialize, Serialize};

/// Item ID (UUID v4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub uuid::Uuid);

impl ItemId {
    /// Generate a new random item ID
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection-level fields shared by every item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection name (empty until the user types one)
    pub name: String,

    /// Collection description
    pub description: String,
}

/// One trait entry in an item's metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Trait name, taken from the global attribute list
    pub trait_type: String,

    /// Per-item value, filled in by the user
    pub value: String,
}

impl Attribute {
    /// Create an attribute with an empty value
    pub fn empty(trait_type: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: String::new(),
        }
    }
}

/// Editable metadata carried by every item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub name: String,

    pub description: String,

    /// Trait list, kept aligned with the global attribute list
    pub attributes: Vec<Attribute>,
}

impl ItemMetadata {
    /// Rebuild the attribute list against the global trait names.
    ///
    /// # Rules
    /// - Blank trait names are skipped
    /// - Order follows the global list
    /// - Values of traits that already exist are preserved
    /// - Traits added since the last sync start with an empty value
    /// - Traits no longer in the global list are dropped
    pub fn sync_attributes(&mut self, global_attributes: &[String]) {
        let current = std::mem::take(&mut self.attributes);
        self.attributes = global_attributes
            .iter()
            .filter(|trait_type| !trait_type.is_empty())
            .map(|trait_type| {
                current
                    .iter()
                    .find(|attr| &attr.trait_type == trait_type)
                    .cloned()
                    .unwrap_or_else(|| Attribute::empty(trait_type.clone()))
            })
            .collect();
    }
}

/// One uploaded image destined to become one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique item identifier
    pub id: ItemId,

    /// Ordinal assigned at upload time; drives default names and export file names
    pub sequence: u32,

    /// Object URL pointing at the uploaded image bytes
    pub image: String,

    /// Editable metadata
    pub metadata: ItemMetadata,

    /// Set once the user confirms this item's details
    pub saved: bool,
}

/// File picked or dropped by the user, as seen at the input boundary
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// Object URL minted for the file's bytes
    pub object_url: String,

    /// MIME type reported by the browser
    pub content_type: String,
}

impl UploadedFile {
    /// Only `image/*` files become items; everything else is ignored
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}
