// Metadata schema and ZIP packaging for the export step

use std::io::{Cursor, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::models::{Attribute, Item};

/// Compiler tag stamped into every metadata record
pub const COMPILER_TAG: &str = "Lilipad NFT Generator";

/// Archive name stem used when the collection has no name
pub const DEFAULT_ARCHIVE_STEM: &str = "lilipad";

/// Packaging errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("failed to assemble archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-item metadata record, serialized as `metadata/{sequence}.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,

    pub description: String,

    /// Always empty; kept so the record shape matches marketplace readers
    pub external_url: String,

    /// Relative image file name, "{sequence}.png"
    pub image: String,

    pub attributes: Vec<Attribute>,

    pub properties: TokenProperties,

    pub compiler: String,
}

/// Properties block of the metadata record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenProperties {
    pub files: Vec<PropertyFile>,

    pub category: String,

    /// Always empty; creator shares are assigned at mint time
    pub creators: Vec<serde_json::Value>,
}

/// One file reference inside the properties block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyFile {
    pub uri: String,

    #[serde(rename = "type")]
    pub file_type: String,
}

/// Image entry name for an item, without the folder prefix
pub fn image_file_name(sequence: u32) -> String {
    format!("{}.png", sequence)
}

/// Download file name: "{collection name}-collection.zip", falling back to
/// the default stem for unnamed collections
pub fn archive_file_name(collection_name: &str) -> String {
    let stem = if collection_name.is_empty() {
        DEFAULT_ARCHIVE_STEM
    } else {
        collection_name
    };
    format!("{}-collection.zip", stem)
}

/// Build the metadata record for one item.
///
/// Items arriving with an empty name get "Lilipad #{sequence}"; snapshots
/// produced by the editor normally carry a derived name already.
pub fn token_metadata(item: &Item) -> TokenMetadata {
    let image = image_file_name(item.sequence);
    let name = if item.metadata.name.is_empty() {
        format!("Lilipad #{}", item.sequence)
    } else {
        item.metadata.name.clone()
    };
    TokenMetadata {
        name,
        description: item.metadata.description.clone(),
        external_url: String::new(),
        image: image.clone(),
        attributes: item.metadata.attributes.clone(),
        properties: TokenProperties {
            files: vec![PropertyFile {
                uri: image,
                file_type: "image/png".to_string(),
            }],
            category: "image".to_string(),
            creators: Vec::new(),
        },
        compiler: COMPILER_TAG.to_string(),
    }
}

/// Pack items and their resolved image bytes into the downloadable archive.
///
/// Entries are written in ascending sequence order regardless of input
/// order: `images/{n}.png` holds the raw bytes (renamed, never transcoded)
/// and `metadata/{n}.json` the pretty-printed metadata record.
pub fn pack_collection(entries: &[(Item, Vec<u8>)]) -> Result<Vec<u8>, ExportError> {
    let mut sorted: Vec<&(Item, Vec<u8>)> = entries.iter().collect();
    sorted.sort_by_key(|(item, _)| item.sequence);

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();

    for (item, bytes) in sorted {
        archive.start_file(format!("images/{}", image_file_name(item.sequence)), options)?;
        archive.write_all(bytes)?;

        let record = serde_json::to_string_pretty(&token_metadata(item))?;
        archive.start_file(format!("metadata/{}.json", item.sequence), options)?;
        archive.write_all(record.as_bytes())?;
    }

    let cursor = archive.finish()?;
    Ok(cursor.into_inner())
}
