use serde::Deserialize;
use std::fmt;
use thiserror::Error;

// ============================================================================
// Fixed Markup
// ============================================================================

/// Label shown on the button while the form is being submitted.
pub const SUBMITTING_LABEL: &str = "Submitting job, please wait...";

/// Spinner fragment prepended to the container's content.
pub const SPINNER_MARKUP: &str = r#"<div class="spinner-border text-primary"></div>"#;

/// Id of the optional `<script type="application/json">` element holding a
/// [`LoaderConfig`].
pub const CONFIG_ELEMENT_ID: &str = "loader-config";

// ============================================================================
// Element Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Container,
    Button,
    Form,
}

impl ElementRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementRole::Container => "container",
            ElementRole::Button => "button",
            ElementRole::Form => "form",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    #[error("No {role} element with id '{id}'")]
    MissingElement { role: ElementRole, id: String },
    #[error("Form submission failed: {0}")]
    Submit(String),
    #[error("Invalid loader configuration: {0}")]
    Config(String),
}

impl LoaderError {
    pub fn missing(role: ElementRole, id: impl Into<String>) -> Self {
        LoaderError::MissingElement {
            role,
            id: id.into(),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    pub submitting_label: String,
    pub spinner_markup: String,
    /// Skip the prepend when the container already starts with the spinner.
    pub single_spinner: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            submitting_label: SUBMITTING_LABEL.to_string(),
            spinner_markup: SPINNER_MARKUP.to_string(),
            single_spinner: false,
        }
    }
}

impl LoaderConfig {
    pub fn from_json(json: &str) -> Result<Self, LoaderError> {
        serde_json::from_str(json).map_err(|e| LoaderError::Config(e.to_string()))
    }

    /// Container content after the spinner has been applied to `current`.
    pub fn with_spinner(&self, current: &str) -> String {
        if self.single_spinner && current.starts_with(&self.spinner_markup) {
            return current.to_string();
        }
        format!("{}{}", self.spinner_markup, current)
    }
}

// ============================================================================
// Tests
// ============================================================================
