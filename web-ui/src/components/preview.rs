// Export step page: snapshot preview and archive download

use lilipad_core::{archive_file_name, Item};
use lilipad_sessionstore::{LocalStorageBackend, SessionStore};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::export;

#[derive(Properties, PartialEq)]
pub struct PreviewPageProps {
    pub on_return: Callback<()>,
}

#[function_component(PreviewPage)]
pub fn preview_page(props: &PreviewPageProps) -> Html {
    // The snapshot is read once on mount; the editing step never shares
    // live state with this page
    let snapshot = use_state(|| SessionStore::new(LocalStorageBackend::new()).load());
    let downloading = use_state(|| false);

    let (items, collection) = (*snapshot).clone();

    let on_return_click = {
        let on_return = props.on_return.clone();
        Callback::from(move |_| on_return.emit(()))
    };

    let on_download = {
        let items = items.clone();
        let file_name = archive_file_name(&collection.name);
        let downloading = downloading.clone();

        Callback::from(move |_| {
            if *downloading || items.is_empty() {
                return;
            }
            downloading.set(true);

            let items = items.clone();
            let file_name = file_name.clone();
            let downloading = downloading.clone();

            spawn_local(async move {
                let result = match export::build_archive(&items).await {
                    Ok(bytes) => export::trigger_download(&bytes, &file_name),
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => log::info!("collection archive downloaded as {}", file_name),
                    Err(err) => {
                        log::error!("download failed: {}", err);
                        export::alert_download_failed();
                    }
                }
                downloading.set(false);
            });
        })
    };

    let render_card = |item: &Item| {
        let name = if item.metadata.name.is_empty() {
            "Untitled".to_string()
        } else {
            item.metadata.name.clone()
        };

        html! {
            <div class="preview-card" key={item.id.0.to_string()}>
                <span class="preview-card-id">{ format!("ID: {}", item.sequence) }</span>
                <img src={item.image.clone()} alt="nft" />
                <span class="preview-card-name">{ name }</span>
                <div class="preview-card-description">{ item.metadata.description.clone() }</div>
                <div class="preview-card-attributes">
                    { for item.metadata.attributes.iter().enumerate().map(|(index, attr)| html! {
                        <div class="preview-card-attribute" key={index}>
                            <span class="attribute-trait">{ attr.trait_type.clone() }</span>
                            <span class="attribute-value">{ attr.value.clone() }</span>
                        </div>
                    }) }
                </div>
            </div>
        }
    };

    html! {
        <main class="preview-page">
            // ヘッダー（ブランド表示）
            <header class="preview-header">
                <span class="brand-title">{"Lilipad"}</span>
            </header>

            <div class="preview-body">
                <div class="preview-toolbar">
                    <div>
                        <h1 class="page-title">{"Preview Collection"}</h1>
                        if !collection.name.is_empty() {
                            <p class="preview-summary">
                                { format!("{} - {} NFTs", collection.name, items.len()) }
                            </p>
                        }
                    </div>
                    <div class="preview-actions">
                        <button class="return-btn" type="button" onclick={on_return_click.clone()}>
                            {"Return & Edit"}
                        </button>
                        <button
                            class="download-btn"
                            type="button"
                            onclick={on_download}
                            disabled={*downloading || items.is_empty()}
                        >
                            { if *downloading { "Generating ZIP..." } else { "Download All" } }
                        </button>
                    </div>
                </div>

                // スナップショットのカード一覧
                if items.is_empty() {
                    <div class="preview-empty">
                        <p>{"No NFTs to preview."}</p>
                        <button class="go-back-btn" type="button" onclick={on_return_click}>
                            {"Go Back to Create"}
                        </button>
                    </div>
                } else {
                    <div class="preview-grid">
                        { for items.iter().map(render_card) }
                    </div>
                }
            </div>
        </main>
    }
}
