//! Loading feedback for form submissions.
//!
//! A click swaps the button into its "submitting" state, puts a spinner in
//! front of the container's content and then hands the form to the browser.

use std::cell::RefCell;

use shared::{ElementRole, LoaderConfig, LoaderError, CONFIG_ELEMENT_ID};

use crate::dom::{LoaderDocument, SpinnerContainer, SubmitButton, SubmitTarget};

thread_local! {
    static ACTIVE: RefCell<LoadingIndicator> = RefCell::new(LoadingIndicator::default());
}

/// Replace the indicator used by the JS exports and components.
pub fn install(indicator: LoadingIndicator) {
    ACTIVE.with(|active| *active.borrow_mut() = indicator);
}

/// Run `f` with a copy of the active indicator; `f` may call [`install`].
pub fn with_active<R>(f: impl FnOnce(&LoadingIndicator) -> R) -> R {
    let indicator = ACTIVE.with(|active| active.borrow().clone());
    f(&indicator)
}

/// Read the page's loader configuration, falling back to the defaults.
pub fn load_config<D: LoaderDocument>(document: &D) -> LoaderConfig {
    let Some(json) = document.text_content(CONFIG_ELEMENT_ID) else {
        return LoaderConfig::default();
    };
    match LoaderConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            LoaderConfig::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoadingIndicator {
    config: LoaderConfig,
}

impl LoadingIndicator {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Disable the button, relabel it and prepend the spinner to the
    /// container.
    ///
    /// The button is updated before the container is looked up: a missing
    /// button leaves the document as it was, a missing container leaves the
    /// button relabeled and disabled with no spinner.
    pub fn present_loading_state<D: LoaderDocument>(
        &self,
        document: &D,
        container_id: &str,
        button_id: &str,
    ) -> Result<(), LoaderError> {
        let button = document
            .button(button_id)
            .ok_or_else(|| LoaderError::missing(ElementRole::Button, button_id))?;
        button.set_label(&self.config.submitting_label);
        button.set_disabled(true);

        let container = document
            .container(container_id)
            .ok_or_else(|| LoaderError::missing(ElementRole::Container, container_id))?;

        let html = self.config.with_spinner(&container.inner_html());
        container.set_inner_html(&html);
        log::debug!("#{}: {}", container_id, html);

        Ok(())
    }

    /// [`present_loading_state`](Self::present_loading_state), then submit
    /// the form. The loading state is not rolled back when the form is
    /// missing or the submission fails.
    pub fn present_loading_state_and_submit<D: LoaderDocument>(
        &self,
        document: &D,
        container_id: &str,
        form_id: &str,
        button_id: &str,
    ) -> Result<(), LoaderError> {
        self.present_loading_state(document, container_id, button_id)?;

        let form = document
            .form(form_id)
            .ok_or_else(|| LoaderError::missing(ElementRole::Form, form_id))?;
        log::info!("Submitting #{}", form_id);
        form.submit()
    }
}
