// Web UI library for the Lilipad collection wizard
//
// This crate provides the Yew components and the export flow
// for the one-of-one collection frontend application.

use yew::prelude::*;

pub mod components;
pub mod errors;
pub mod export;
pub mod messages;

// Re-export components
pub use components::*;

/// Main application component（状態管理とイベントハンドリング）
#[function_component(App)]
pub fn app() -> Html {
    use lilipad_core::{CollectionEditor, ItemDraft, ItemId, UploadedFile};

    /// Wizard stage shown by the root component
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Stage {
        Editor,
        Preview,
    }

    /// Re-align an open draft after the global attribute list changes
    fn resync_draft(draft: &UseStateHandle<Option<ItemDraft>>, editor: &CollectionEditor) {
        if let Some(current) = draft.as_ref() {
            let mut synced = current.clone();
            synced.sync_globals(editor.global_attributes());
            draft.set(Some(synced));
        }
    }

    let editor = use_state(CollectionEditor::new);
    let stage = use_state(|| Stage::Editor);
    let selected = use_state(|| None::<ItemId>);
    let draft = use_state(|| None::<ItemDraft>);

    let on_name_change = {
        let editor = editor.clone();
        Callback::from(move |name: String| {
            let mut next = (*editor).clone();
            next.set_collection_name(name);
            editor.set(next);
        })
    };

    let on_description_change = {
        let editor = editor.clone();
        Callback::from(move |description: String| {
            let mut next = (*editor).clone();
            next.set_collection_description(description);
            editor.set(next);
        })
    };

    let on_lock_names_change = {
        let editor = editor.clone();
        Callback::from(move |locked: bool| {
            let mut next = (*editor).clone();
            next.set_lock_names(locked);
            editor.set(next);
        })
    };

    let on_lock_descriptions_change = {
        let editor = editor.clone();
        Callback::from(move |locked: bool| {
            let mut next = (*editor).clone();
            next.set_lock_descriptions(locked);
            editor.set(next);
        })
    };

    let on_files = {
        let editor = editor.clone();
        Callback::from(move |files: Vec<UploadedFile>| {
            let mut next = (*editor).clone();
            next.add_images(files);
            editor.set(next);
        })
    };

    let on_add_attribute = {
        let editor = editor.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            let mut next = (*editor).clone();
            next.add_global_attribute();
            resync_draft(&draft, &next);
            editor.set(next);
        })
    };

    let on_update_attribute = {
        let editor = editor.clone();
        let draft = draft.clone();
        Callback::from(move |(index, value): (usize, String)| {
            let mut next = (*editor).clone();
            next.update_global_attribute(index, value);
            resync_draft(&draft, &next);
            editor.set(next);
        })
    };

    let on_remove_attribute = {
        let editor = editor.clone();
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*editor).clone();
            next.remove_global_attribute(index);
            resync_draft(&draft, &next);
            editor.set(next);
        })
    };

    let on_select = {
        let editor = editor.clone();
        let selected = selected.clone();
        let draft = draft.clone();
        Callback::from(move |id: ItemId| {
            if let Some(item) = editor.item(id) {
                draft.set(Some(ItemDraft::open(item)));
                selected.set(Some(id));
            }
        })
    };

    let on_draft_name = {
        let draft = draft.clone();
        Callback::from(move |name: String| {
            if let Some(current) = draft.as_ref() {
                let mut next = current.clone();
                next.set_name(name);
                draft.set(Some(next));
            }
        })
    };

    let on_draft_description = {
        let draft = draft.clone();
        Callback::from(move |description: String| {
            if let Some(current) = draft.as_ref() {
                let mut next = current.clone();
                next.set_description(description);
                draft.set(Some(next));
            }
        })
    };

    let on_draft_value = {
        let draft = draft.clone();
        Callback::from(move |(index, value): (usize, String)| {
            if let Some(current) = draft.as_ref() {
                let mut next = current.clone();
                next.set_attribute_value(index, value);
                draft.set(Some(next));
            }
        })
    };

    let on_draft_remove = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            if let Some(current) = draft.as_ref() {
                let mut next = current.clone();
                next.remove_attribute(index);
                draft.set(Some(next));
            }
        })
    };

    let on_save_draft = {
        let editor = editor.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            if let Some(current) = draft.as_ref() {
                let (id, metadata) = current.clone().commit(editor.locks(), editor.collection());
                let mut next = (*editor).clone();
                next.update_item(id, metadata);
                editor.set(next);
                draft.set(None);
            }
        })
    };

    let on_cancel_draft = {
        let draft = draft.clone();
        Callback::from(move |_| {
            draft.set(None);
        })
    };

    let on_save_all = {
        let editor = editor.clone();
        Callback::from(move |_| {
            let mut next = (*editor).clone();
            next.save_all();
            editor.set(next);
        })
    };

    let on_next = {
        let editor = editor.clone();
        let stage = stage.clone();

        Callback::from(move |_| {
            use lilipad_sessionstore::{LocalStorageBackend, SessionStore};

            if !editor.ready_for_export() {
                return;
            }

            let store = SessionStore::new(LocalStorageBackend::new());
            match store.commit(&editor.snapshot_items(), editor.collection()) {
                Ok(()) => stage.set(Stage::Preview),
                Err(e) => log::error!("failed to stage the collection for export: {}", e),
            }
        })
    };

    let on_return = {
        let stage = stage.clone();

        Callback::from(move |_| {
            use lilipad_sessionstore::{LocalStorageBackend, SessionStore};

            SessionStore::new(LocalStorageBackend::new()).clear();
            stage.set(Stage::Editor);
        })
    };

    if *stage == Stage::Preview {
        return html! { <PreviewPage on_return={on_return} /> };
    }

    let gate_hint = messages::export_gate_hint(editor.export_gate());
    let can_edit = editor.can_add_images();
    let selected_item = (*selected).and_then(|id| editor.item(id).cloned());

    html! {
        <main class="app-container">
            // ヘッダー（タイトルとNextボタン）
            <header class="app-header">
                <span class="brand-title">{"Generate Unique One-of-One Collections"}</span>
                <div class="header-actions">
                    <button
                        class="next-btn"
                        type="button"
                        onclick={on_next}
                        disabled={!editor.ready_for_export()}
                    >
                        {"Next"}
                    </button>
                    if let Some(hint) = gate_hint {
                        <div class="gate-hint">{ hint }</div>
                    }
                </div>
            </header>

            <div class="wizard-body">
                // 左: コレクション設定とグローバル属性
                <aside class="collection-panel">
                    <CollectionForm
                        collection={editor.collection().clone()}
                        locks={editor.locks()}
                        item_count={editor.items().len()}
                        on_name_change={on_name_change}
                        on_description_change={on_description_change}
                        on_lock_names_change={on_lock_names_change}
                        on_lock_descriptions_change={on_lock_descriptions_change}
                    />
                    <GlobalAttributes
                        attributes={editor.global_attributes().to_vec()}
                        on_add={on_add_attribute}
                        on_update={on_update_attribute}
                        on_remove={on_remove_attribute}
                    />
                    <ItemPreview item={selected_item} />
                </aside>

                // 中央: アップロードゾーンとアイテム一覧
                <section class="workspace-panel">
                    <UploadZone enabled={can_edit} on_files={on_files} />
                    <ItemGrid
                        items={editor.items().to_vec()}
                        selected={*selected}
                        can_select={can_edit}
                        on_select={on_select}
                    />
                </section>

                // 右: アイテム詳細編集
                <aside class="details-panel">
                    <h3 class="panel-subtitle">{"NFT Details"}</h3>
                    if let Some(current) = (*draft).clone() {
                        <ItemDetails
                            draft={current}
                            locks={editor.locks()}
                            collection={editor.collection().clone()}
                            on_name_change={on_draft_name}
                            on_description_change={on_draft_description}
                            on_value_change={on_draft_value}
                            on_remove_attribute={on_draft_remove}
                            on_save={on_save_draft}
                            on_cancel={on_cancel_draft}
                            on_save_all={on_save_all}
                        />
                    } else {
                        <div class="details-hint">{ messages::details_pane_hint(can_edit) }</div>
                    }
                </aside>
            </div>
        </main>
    }
}
