use shared::LoaderError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

use super::{LoaderDocument, SpinnerContainer, SubmitButton, SubmitTarget};

/// [`LoaderDocument`] over a live `web_sys::Document`.
#[derive(Clone)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Document of the current window, if running in a browser page.
    pub fn current() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

impl LoaderDocument for WebDocument {
    type Container = WebContainer;
    type Button = WebButton;
    type Form = WebForm;

    fn container(&self, id: &str) -> Option<WebContainer> {
        self.element(id).map(WebContainer)
    }

    fn button(&self, id: &str) -> Option<WebButton> {
        self.element(id).map(WebButton::from)
    }

    fn form(&self, id: &str) -> Option<WebForm> {
        self.element(id)?.dyn_into::<HtmlFormElement>().ok().map(WebForm)
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }
}

pub struct WebContainer(Element);

impl SpinnerContainer for WebContainer {
    fn inner_html(&self) -> String {
        self.0.inner_html()
    }

    fn set_inner_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }
}

/// Buttons come as `<button>`, as `<input type="submit">` or as any other
/// element a page wired a click handler to.
pub enum WebButton {
    Button(HtmlButtonElement),
    Input(HtmlInputElement),
    Other(Element),
}

impl From<Element> for WebButton {
    fn from(element: Element) -> Self {
        element
            .dyn_into::<HtmlButtonElement>()
            .map(WebButton::Button)
            .or_else(|el| el.dyn_into::<HtmlInputElement>().map(WebButton::Input))
            .unwrap_or_else(WebButton::Other)
    }
}

impl SubmitButton for WebButton {
    fn set_label(&self, label: &str) {
        match self {
            WebButton::Button(button) => button.set_inner_text(label),
            WebButton::Input(input) => input.set_value(label),
            WebButton::Other(element) => element.set_text_content(Some(label)),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        match self {
            WebButton::Button(button) => button.set_disabled(disabled),
            WebButton::Input(input) => input.set_disabled(disabled),
            WebButton::Other(element) => {
                let result = if disabled {
                    element.set_attribute("disabled", "")
                } else {
                    element.remove_attribute("disabled")
                };
                if let Err(e) = result {
                    log::warn!("Could not toggle disabled: {}", describe_js_error(&e));
                }
            }
        }
    }
}

pub struct WebForm(HtmlFormElement);

impl SubmitTarget for WebForm {
    fn submit(&self) -> Result<(), LoaderError> {
        self.0
            .submit()
            .map_err(|e| LoaderError::Submit(describe_js_error(&e)))
    }
}

pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
