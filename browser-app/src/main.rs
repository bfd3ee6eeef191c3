// Lilipad Collection Wizard Browser Application

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use lilipad_web_ui::App;

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <App />
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Info);

    yew::Renderer::<Main>::new().render();
}

fn main() {
    run_app();
}
