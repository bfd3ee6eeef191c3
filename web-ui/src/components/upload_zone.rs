// Image upload zone component (drag & drop plus file picker)

use lilipad_core::UploadedFile;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadZoneProps {
    pub enabled: bool,
    pub on_files: Callback<Vec<UploadedFile>>,
}

/// Mint an object URL for each picked file
///
/// The MIME filter lives in the editor, so dropped non-images never
/// become items even though they pass through here
fn collect_files(list: Option<web_sys::FileList>) -> Vec<UploadedFile> {
    let mut files = Vec::new();
    if let Some(list) = list {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                if let Ok(object_url) = web_sys::Url::create_object_url_with_blob(&file) {
                    files.push(UploadedFile {
                        object_url,
                        content_type: file.type_(),
                    });
                }
            }
        }
    }
    files
}

#[function_component(UploadZone)]
pub fn upload_zone(props: &UploadZoneProps) -> Html {
    let input_ref = use_node_ref();

    let on_change = {
        let on_files = props.on_files.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_files.emit(collect_files(input.files()));
        })
    };

    let on_drop = {
        let enabled = props.enabled;
        let on_files = props.on_files.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if !enabled {
                return;
            }
            let list = e.data_transfer().and_then(|transfer| transfer.files());
            on_files.emit(collect_files(list));
        })
    };

    let on_drag_over = Callback::from(|e: DragEvent| e.prevent_default());

    let on_zone_click = {
        let enabled = props.enabled;
        let input_ref = input_ref.clone();
        Callback::from(move |_| {
            if !enabled {
                return;
            }
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };

    let on_select_click = {
        let enabled = props.enabled;
        let input_ref = input_ref.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if !enabled {
                return;
            }
            if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div
            class={classes!("upload-zone", (!props.enabled).then(|| "disabled"))}
            ondrop={on_drop}
            ondragover={on_drag_over}
            onclick={on_zone_click}
        >
            <span class="upload-title">{"Drag & Drop Images Here"}</span>
            <span class="upload-caption">{"PNG, JPG, etc. Each image will be a unique NFT."}</span>
            <button
                class="select-images-btn"
                type="button"
                disabled={!props.enabled}
                onclick={on_select_click}
            >
                {"Select Images"}
            </button>
            if !props.enabled {
                <span class="upload-hint">{"Fill in collection name and description to add images"}</span>
            }
            <input
                ref={input_ref}
                type="file"
                accept="image/*"
                multiple={true}
                class="hidden"
                onchange={on_change}
            />
        </div>
    }
}
