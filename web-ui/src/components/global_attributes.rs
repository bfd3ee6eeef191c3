// Global attribute list editor component

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GlobalAttributesProps {
    pub attributes: Vec<String>,
    pub on_add: Callback<()>,
    pub on_update: Callback<(usize, String)>,
    pub on_remove: Callback<usize>,
}

#[function_component(GlobalAttributes)]
pub fn global_attributes(props: &GlobalAttributesProps) -> Html {
    let render_row = |(index, trait_type): (usize, &String)| {
        let on_input = {
            let on_update = props.on_update.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                on_update.emit((index, input.value()));
            })
        };

        let on_remove_click = {
            let on_remove = props.on_remove.clone();
            Callback::from(move |_| on_remove.emit(index))
        };

        html! {
            <div class="attribute-row" key={index}>
                <input
                    class="field-input"
                    value={trait_type.clone()}
                    oninput={on_input}
                    placeholder="Trait Type"
                />
                <button class="remove-btn" type="button" onclick={on_remove_click}>{"×"}</button>
            </div>
        }
    };

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_| on_add.emit(()))
    };

    html! {
        <div class="global-attributes">
            <h3 class="panel-subtitle">{"Global Attributes"}</h3>
            <div class="attribute-list">
                { for props.attributes.iter().enumerate().map(render_row) }
                <button class="add-attribute-btn" type="button" onclick={on_add_click}>
                    {"+ Add Attribute"}
                </button>
            </div>
            <p class="panel-caption">
                {"These attributes will appear for every NFT. Set values per NFT in the details panel."}
            </p>
        </div>
    }
}
