pub mod bindings;
pub mod components;
pub mod dom;
pub mod loader;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();

    if let Some(document) = dom::WebDocument::current() {
        loader::install(loader::LoadingIndicator::new(loader::load_config(&document)));
    }
}
