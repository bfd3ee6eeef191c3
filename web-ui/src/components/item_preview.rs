// Selected item preview component (image and stored metadata)

use lilipad_core::Item;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemPreviewProps {
    pub item: Option<Item>,
}

#[function_component(ItemPreview)]
pub fn item_preview(props: &ItemPreviewProps) -> Html {
    html! {
        <div class="item-preview">
            <h3 class="panel-subtitle">{"NFT Preview"}</h3>
            {
                match &props.item {
                    Some(item) => {
                        let metadata =
                            serde_json::to_string_pretty(&item.metadata).unwrap_or_default();
                        html! {
                            <div class="item-preview-body">
                                <img src={item.image.clone()} alt="nft preview" />
                                <pre class="item-preview-metadata">{ metadata }</pre>
                            </div>
                        }
                    }
                    None => html! {
                        <div class="item-preview-empty">{"Select an NFT to preview"}</div>
                    },
                }
            }
        </div>
    }
}
