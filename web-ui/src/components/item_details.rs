// Item detail editor component (draft-backed panel)

use lilipad_core::{Attribute, Collection, ItemDraft, LockFlags};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ItemDetailsProps {
    pub draft: ItemDraft,
    pub locks: LockFlags,
    pub collection: Collection,
    pub on_name_change: Callback<String>,
    pub on_description_change: Callback<String>,
    pub on_value_change: Callback<(usize, String)>,
    pub on_remove_attribute: Callback<usize>,
    pub on_save: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_save_all: Callback<()>,
}

#[function_component(ItemDetails)]
pub fn item_details(props: &ItemDetailsProps) -> Html {
    let on_name_input = {
        let locked = props.locks.lock_names;
        let on_name_change = props.on_name_change.clone();
        Callback::from(move |e: InputEvent| {
            if locked {
                return;
            }
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            on_name_change.emit(input.value());
        })
    };

    let on_description_input = {
        let locked = props.locks.lock_descriptions;
        let on_description_change = props.on_description_change.clone();
        Callback::from(move |e: InputEvent| {
            if locked {
                return;
            }
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            on_description_change.emit(input.value());
        })
    };

    let render_attribute = |(index, attr): (usize, &Attribute)| {
        let on_input = {
            let on_value_change = props.on_value_change.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                on_value_change.emit((index, input.value()));
            })
        };

        let on_remove_click = {
            let on_remove_attribute = props.on_remove_attribute.clone();
            Callback::from(move |_| on_remove_attribute.emit(index))
        };

        html! {
            <div class="attribute-row" key={index}>
                <input class="field-input readonly" value={attr.trait_type.clone()} readonly={true} />
                <input
                    class="field-input"
                    value={attr.value.clone()}
                    oninput={on_input}
                    placeholder="Value"
                />
                <button class="remove-btn" type="button" onclick={on_remove_click}>{"×"}</button>
            </div>
        }
    };

    let on_save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_| on_save.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    let on_save_all_click = {
        let on_save_all = props.on_save_all.clone();
        Callback::from(move |_| on_save_all.emit(()))
    };

    html! {
        <div class="item-details">
            <div class="item-details-header">
                <label class="field-label">{"Token ID"}</label>
                <input
                    class="field-input readonly token-id"
                    value={props.draft.sequence().to_string()}
                    readonly={true}
                    tabindex="-1"
                />
                <button class="save-all-btn" type="button" onclick={on_save_all_click}>
                    {"Save All"}
                </button>
            </div>

            <h3 class="panel-subtitle">{"NFT Properties"}</h3>

            <label class="field-label">{"Name"}
                <input
                    class={classes!("field-input", props.locks.lock_names.then(|| "readonly"))}
                    value={props.draft.display_name(props.locks, &props.collection)}
                    oninput={on_name_input}
                    readonly={props.locks.lock_names}
                />
            </label>

            <label class="field-label">{"Description"}
                <textarea
                    class={classes!("field-input", props.locks.lock_descriptions.then(|| "readonly"))}
                    value={props.draft.display_description(props.locks, &props.collection)}
                    oninput={on_description_input}
                    rows="2"
                    readonly={props.locks.lock_descriptions}
                />
            </label>

            <div class="item-details-attributes">
                <span class="field-label">{"Attributes"}</span>
                <div class="attribute-list">
                    { for props.draft.metadata().attributes.iter().enumerate().map(render_attribute) }
                </div>
            </div>

            <div class="item-details-actions">
                <button class="save-btn" type="button" onclick={on_save_click}>{"Save"}</button>
                <button class="cancel-btn" type="button" onclick={on_cancel_click}>{"Cancel"}</button>
            </div>
        </div>
    }
}
