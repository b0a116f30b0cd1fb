//! Functions exported to page scripts, e.g.
//! `onclick="showLoaderOnClick('loader', 'job-form', 'submit-btn')"`.

use shared::LoaderError;
use wasm_bindgen::prelude::*;

use crate::dom::WebDocument;
use crate::loader;

fn current_document() -> Result<WebDocument, JsValue> {
    WebDocument::current().ok_or_else(|| js_sys::Error::new("No document available").into())
}

fn to_js_error(err: LoaderError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen(js_name = showLoader)]
pub fn show_loader(div_id: &str, btn_id: &str) -> Result<(), JsValue> {
    let document = current_document()?;
    loader::with_active(|indicator| indicator.present_loading_state(&document, div_id, btn_id))
        .map_err(to_js_error)
}

#[wasm_bindgen(js_name = showLoaderOnClick)]
pub fn show_loader_on_click(div_id: &str, form_id: &str, btn_id: &str) -> Result<(), JsValue> {
    let document = current_document()?;
    loader::with_active(|indicator| {
        indicator.present_loading_state_and_submit(&document, div_id, form_id, btn_id)
    })
    .map_err(to_js_error)
}
