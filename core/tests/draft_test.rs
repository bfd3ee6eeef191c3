// Unit tests for the item draft transaction

use lilipad_core::*;

fn png(url: &str) -> UploadedFile {
    UploadedFile {
        object_url: url.to_string(),
        content_type: "image/png".to_string(),
    }
}

fn editor_with_items(count: usize) -> CollectionEditor {
    let mut editor = CollectionEditor::new();
    editor.set_collection_name("Frogs".to_string());
    editor.set_collection_description("A pond of frogs".to_string());
    editor.add_global_attribute();
    editor.update_global_attribute(0, "Background".to_string());
    editor.add_images((0..count).map(|i| png(&format!("blob:img-{}", i))).collect());
    editor
}

// ==================== Open / Commit Tests ====================

#[test]
fn test_open_copies_item_metadata() {
    let editor = editor_with_items(1);
    let item = &editor.items()[0];
    let draft = ItemDraft::open(item);

    assert_eq!(draft.item_id(), item.id);
    assert_eq!(draft.sequence(), item.sequence);
    assert_eq!(draft.metadata(), &item.metadata);
}

#[test]
fn test_edits_stay_local_until_commit() {
    let mut editor = editor_with_items(1);
    let item = editor.items()[0].clone();

    let mut draft = ItemDraft::open(&item);
    draft.set_attribute_value(0, "Green".to_string());

    // The committed item is untouched while the draft is open
    assert_eq!(editor.items()[0].metadata.attributes[0].value, "");
    assert!(!editor.items()[0].saved);

    let (id, metadata) = draft.commit(editor.locks(), editor.collection());
    editor.update_item(id, metadata);

    assert_eq!(editor.items()[0].metadata.attributes[0].value, "Green");
    assert!(editor.items()[0].saved);
}

#[test]
fn test_dropping_draft_discards_edits() {
    let editor = editor_with_items(1);
    let before = editor.items().to_vec();

    {
        let mut draft = ItemDraft::open(&editor.items()[0]);
        draft.set_attribute_value(0, "Green".to_string());
        draft.set_name("Custom".to_string());
        // dropped without commit
    }

    assert_eq!(editor.items()[0].metadata, before[0].metadata);
    assert!(!editor.items()[0].saved);
}

#[test]
fn test_commit_resolves_locked_fields_to_derived_values() {
    let mut editor = editor_with_items(4);
    let item = editor.items()[3].clone();

    let mut draft = ItemDraft::open(&item);
    draft.set_name("Custom".to_string());
    draft.set_description("Own words".to_string());

    let (id, metadata) = draft.commit(editor.locks(), editor.collection());
    editor.update_item(id, metadata);

    assert_eq!(editor.items()[3].metadata.name, "Frogs #3");
    assert_eq!(editor.items()[3].metadata.description, "A pond of frogs");
}

#[test]
fn test_commit_keeps_edits_when_unlocked() {
    let mut editor = editor_with_items(1);
    editor.set_lock_names(false);
    editor.set_lock_descriptions(false);
    let item = editor.items()[0].clone();

    let mut draft = ItemDraft::open(&item);
    draft.set_name("Custom".to_string());
    draft.set_description("Own words".to_string());

    let (id, metadata) = draft.commit(editor.locks(), editor.collection());
    editor.update_item(id, metadata);

    assert_eq!(editor.items()[0].metadata.name, "Custom");
    assert_eq!(editor.items()[0].metadata.description, "Own words");
}

// ==================== Display Tests ====================

#[test]
fn test_display_name_derived_while_locked() {
    let editor = editor_with_items(4);
    let mut draft = ItemDraft::open(&editor.items()[3]);
    draft.set_name("Custom".to_string());

    assert_eq!(
        draft.display_name(editor.locks(), editor.collection()),
        "Frogs #3"
    );
}

#[test]
fn test_display_name_working_copy_when_unlocked() {
    let mut editor = editor_with_items(1);
    editor.set_lock_names(false);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.set_name("Custom".to_string());

    assert_eq!(
        draft.display_name(editor.locks(), editor.collection()),
        "Custom"
    );
}

#[test]
fn test_display_description_follows_lock_state() {
    let mut editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.set_description("Own words".to_string());

    assert_eq!(
        draft.display_description(editor.locks(), editor.collection()),
        "A pond of frogs"
    );

    editor.set_lock_descriptions(false);
    assert_eq!(
        draft.display_description(editor.locks(), editor.collection()),
        "Own words"
    );
}

// ==================== Attribute Edit Tests ====================

#[test]
fn test_set_attribute_value_out_of_range_ignored() {
    let editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.set_attribute_value(9, "Green".to_string());

    assert_eq!(draft.metadata().attributes[0].value, "");
}

#[test]
fn test_remove_attribute_out_of_range_ignored() {
    let editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.remove_attribute(9);

    assert_eq!(draft.metadata().attributes.len(), 1);
}

// ==================== Global Sync Tests ====================

#[test]
fn test_sync_globals_adds_new_trait_with_empty_value() {
    let editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.set_attribute_value(0, "Green".to_string());

    draft.sync_globals(&["Background".to_string(), "Eyes".to_string()]);

    let attrs = &draft.metadata().attributes;
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].trait_type, "Background");
    assert_eq!(attrs[0].value, "Green");
    assert_eq!(attrs[1].trait_type, "Eyes");
    assert_eq!(attrs[1].value, "");
}

#[test]
fn test_sync_globals_drops_traits_no_longer_listed() {
    let editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);

    draft.sync_globals(&["Eyes".to_string()]);

    let attrs = &draft.metadata().attributes;
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].trait_type, "Eyes");
}

#[test]
fn test_locally_removed_attribute_reappears_on_sync() {
    let editor = editor_with_items(1);
    let mut draft = ItemDraft::open(&editor.items()[0]);
    draft.set_attribute_value(0, "Green".to_string());
    draft.remove_attribute(0);
    assert!(draft.metadata().attributes.is_empty());

    // The global list still carries the trait, so a sync puts it back,
    // value reset
    draft.sync_globals(&["Background".to_string()]);

    let attrs = &draft.metadata().attributes;
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].trait_type, "Background");
    assert_eq!(attrs[0].value, "");
}

#[test]
fn test_local_removal_survives_commit_until_next_global_change() {
    let mut editor = editor_with_items(1);
    let item = editor.items()[0].clone();

    let mut draft = ItemDraft::open(&item);
    draft.remove_attribute(0);
    let (id, metadata) = draft.commit(editor.locks(), editor.collection());
    editor.update_item(id, metadata);

    // The committed item is missing the trait for now
    assert!(editor.items()[0].metadata.attributes.is_empty());

    // The next change to the global list re-adds it with an empty value
    editor.add_global_attribute();
    editor.update_global_attribute(1, "Eyes".to_string());

    let attrs = &editor.items()[0].metadata.attributes;
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].trait_type, "Background");
    assert_eq!(attrs[0].value, "");
    assert_eq!(attrs[1].trait_type, "Eyes");
}
