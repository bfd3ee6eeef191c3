// Collection settings form component (name, description, locks, size)

use lilipad_core::{Collection, LockFlags};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollectionFormProps {
    pub collection: Collection,
    pub locks: LockFlags,
    pub item_count: usize,
    pub on_name_change: Callback<String>,
    pub on_description_change: Callback<String>,
    pub on_lock_names_change: Callback<bool>,
    pub on_lock_descriptions_change: Callback<bool>,
}

#[function_component(CollectionForm)]
pub fn collection_form(props: &CollectionFormProps) -> Html {
    let on_name_input = {
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let on_description_input = {
        let on_description_change = props.on_description_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_description_change.emit(input.value());
        })
    };

    let on_lock_names_toggle = {
        let on_lock_names_change = props.on_lock_names_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_lock_names_change.emit(input.checked());
        })
    };

    let on_lock_descriptions_toggle = {
        let on_lock_descriptions_change = props.on_lock_descriptions_change.clone();
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_lock_descriptions_change.emit(input.checked());
        })
    };

    html! {
        <div class="collection-form">
            <h2 class="panel-title">{"Collection"}</h2>

            <label class="field-label">{"Name"}
                <input
                    class="field-input"
                    value={props.collection.name.clone()}
                    oninput={on_name_input}
                    placeholder="e.g., My Awesome Collection"
                />
            </label>

            <label class="field-label">{"Description"}
                <textarea
                    class="field-input"
                    value={props.collection.description.clone()}
                    oninput={on_description_input}
                    placeholder="A unique collection of hand-drawn NFTs"
                    rows="3"
                />
            </label>

            // ロックスイッチ（名前と説明文）
            <div class="lock-switches">
                <label class="lock-switch">
                    <input
                        type="checkbox"
                        checked={props.locks.lock_names}
                        onchange={on_lock_names_toggle}
                    />
                    {"Lock NFT names to collection name + #ID"}
                </label>
                <label class="lock-switch">
                    <input
                        type="checkbox"
                        checked={props.locks.lock_descriptions}
                        onchange={on_lock_descriptions_toggle}
                    />
                    {"Lock NFT descriptions to collection description"}
                </label>
                <div class="lock-caption">
                    <p>{"• "}<strong>{"ON:"}</strong>{" All NFTs use collection defaults"}</p>
                    <p>{"• "}<strong>{"OFF:"}</strong>{" Edit each NFT individually"}</p>
                </div>
            </div>

            <label class="field-label">{"Collection Size"}
                <input
                    class="field-input readonly"
                    value={props.item_count.to_string()}
                    readonly={true}
                    tabindex="-1"
                />
            </label>
        </div>
    }
}
