//! Element lookup and mutation seam.
//!
//! The loading indicator only needs three kinds of element and one text
//! lookup, so the document is modelled as a small trait. [`WebDocument`]
//! backs it with the browser DOM.

use shared::LoaderError;

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod web;

pub use web::{WebButton, WebContainer, WebDocument, WebForm};

/// Element whose inner markup receives the spinner.
pub trait SpinnerContainer {
    fn inner_html(&self) -> String;
    fn set_inner_html(&self, html: &str);
}

/// Element that triggered the submission.
pub trait SubmitButton {
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
}

/// Form-like element that can be submitted programmatically.
pub trait SubmitTarget {
    fn submit(&self) -> Result<(), LoaderError>;
}

pub trait LoaderDocument {
    type Container: SpinnerContainer;
    type Button: SubmitButton;
    type Form: SubmitTarget;

    fn container(&self, id: &str) -> Option<Self::Container>;
    fn button(&self, id: &str) -> Option<Self::Button>;
    fn form(&self, id: &str) -> Option<Self::Form>;

    /// Text content of the element with `id`, if present.
    fn text_content(&self, id: &str) -> Option<String>;
}
