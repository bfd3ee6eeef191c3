// Item grid component with selection

use lilipad_core::{Item, ItemId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemGridProps {
    pub items: Vec<Item>,
    pub selected: Option<ItemId>,
    pub can_select: bool,
    pub on_select: Callback<ItemId>,
}

#[function_component(ItemGrid)]
pub fn item_grid(props: &ItemGridProps) -> Html {
    let render_card = |item: &Item| {
        let id = item.id;
        let on_click = {
            let can_select = props.can_select;
            let on_select = props.on_select.clone();
            Callback::from(move |_| {
                if can_select {
                    on_select.emit(id);
                }
            })
        };

        // The grid shows the stored name, so an unsaved item under an
        // active name lock still reads "Untitled"
        let name = if item.metadata.name.is_empty() {
            "Untitled".to_string()
        } else {
            item.metadata.name.clone()
        };

        html! {
            <div
                class={classes!(
                    "item-card",
                    (props.selected == Some(item.id)).then(|| "selected"),
                    (!props.can_select).then(|| "disabled"),
                )}
                key={item.id.0.to_string()}
                onclick={on_click}
            >
                <span class="item-card-id">{ format!("ID: {}", item.sequence) }</span>
                <img src={item.image.clone()} alt="nft" />
                <span class="item-card-name">{ name }</span>
                if item.saved {
                    <span class="item-card-saved">{"✓ Saved"}</span>
                }
            </div>
        }
    };

    html! {
        <div class="item-grid">
            { for props.items.iter().map(render_card) }
        </div>
    }
}
