// Unit tests for metadata records and archive packaging

use std::io::{Cursor, Read};

use lilipad_core::*;
use zip::ZipArchive;

fn item(sequence: u32, name: &str, description: &str, attributes: Vec<Attribute>) -> Item {
    Item {
        id: ItemId::new(),
        sequence,
        image: format!("blob:img-{}", sequence),
        metadata: ItemMetadata {
            name: name.to_string(),
            description: description.to_string(),
            attributes,
        },
        saved: true,
    }
}

// ==================== Token Metadata Tests ====================

#[test]
fn test_token_metadata_record_shape() {
    let item = item(
        3,
        "Frogs #3",
        "A pond of frogs",
        vec![Attribute {
            trait_type: "Background".to_string(),
            value: "Green".to_string(),
        }],
    );

    let value = serde_json::to_value(token_metadata(&item)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Frogs #3",
            "description": "A pond of frogs",
            "external_url": "",
            "image": "3.png",
            "attributes": [
                { "trait_type": "Background", "value": "Green" }
            ],
            "properties": {
                "files": [
                    { "uri": "3.png", "type": "image/png" }
                ],
                "category": "image",
                "creators": []
            },
            "compiler": "Lilipad NFT Generator"
        })
    );
}

#[test]
fn test_token_metadata_name_fallback() {
    let record = token_metadata(&item(7, "", "", vec![]));
    assert_eq!(record.name, "Lilipad #7");
    assert_eq!(record.description, "");
}

#[test]
fn test_token_metadata_keeps_attribute_order() {
    let record = token_metadata(&item(
        0,
        "Frogs #0",
        "",
        vec![
            Attribute {
                trait_type: "Background".to_string(),
                value: "Green".to_string(),
            },
            Attribute {
                trait_type: "Eyes".to_string(),
                value: "Red".to_string(),
            },
        ],
    ));

    assert_eq!(record.attributes[0].trait_type, "Background");
    assert_eq!(record.attributes[1].trait_type, "Eyes");
}

// ==================== Archive Tests ====================

fn read_entry(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut entry = archive.by_name(name).unwrap();
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}

#[test]
fn test_pack_collection_layout() {
    let entries = vec![
        (item(0, "Frogs #0", "A pond of frogs", vec![]), vec![1u8, 2, 3]),
        (item(1, "Frogs #1", "A pond of frogs", vec![]), vec![4u8, 5]),
    ];

    let bytes = pack_collection(&entries).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(archive.len(), 4);
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "images/0.png",
            "metadata/0.json",
            "images/1.png",
            "metadata/1.json",
        ]
    );
}

#[test]
fn test_pack_collection_metadata_matches_items() {
    let entries = vec![(
        item(
            0,
            "Frogs #0",
            "A pond of frogs",
            vec![Attribute {
                trait_type: "Background".to_string(),
                value: "Green".to_string(),
            }],
        ),
        vec![9u8],
    )];

    let bytes = pack_collection(&entries).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let record = read_entry(&mut archive, "metadata/0.json");
    let record: serde_json::Value = serde_json::from_slice(&record).unwrap();

    assert_eq!(record["name"], "Frogs #0");
    assert_eq!(record["image"], "0.png");
    assert_eq!(record["attributes"][0]["value"], "Green");
    assert_eq!(record["compiler"], "Lilipad NFT Generator");
}

#[test]
fn test_pack_collection_roundtrips_image_bytes() {
    let pixels = vec![0x89u8, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let entries = vec![(item(0, "Frogs #0", "", vec![]), pixels.clone())];

    let bytes = pack_collection(&entries).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    assert_eq!(read_entry(&mut archive, "images/0.png"), pixels);
}

#[test]
fn test_pack_collection_orders_by_sequence() {
    let entries = vec![
        (item(2, "Frogs #2", "", vec![]), vec![2u8]),
        (item(0, "Frogs #0", "", vec![]), vec![0u8]),
        (item(1, "Frogs #1", "", vec![]), vec![1u8]),
    ];

    let bytes = pack_collection(&entries).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let first = archive.by_index(0).unwrap().name().to_string();
    assert_eq!(first, "images/0.png");

    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    let images: Vec<&String> = names.iter().filter(|n| n.starts_with("images/")).collect();
    assert_eq!(images, ["images/0.png", "images/1.png", "images/2.png"]);
}

#[test]
fn test_pack_collection_metadata_is_pretty_printed() {
    let entries = vec![(item(0, "Frogs #0", "", vec![]), vec![1u8])];

    let bytes = pack_collection(&entries).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

    let record = String::from_utf8(read_entry(&mut archive, "metadata/0.json")).unwrap();
    assert!(record.starts_with("{\n  \"name\""));
}

// ==================== File Name Tests ====================

#[test]
fn test_image_file_name() {
    assert_eq!(image_file_name(0), "0.png");
    assert_eq!(image_file_name(42), "42.png");
}

#[test]
fn test_archive_file_name() {
    assert_eq!(archive_file_name("Frogs"), "Frogs-collection.zip");
}

#[test]
fn test_archive_file_name_fallback() {
    assert_eq!(archive_file_name(""), "lilipad-collection.zip");
}
