use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use shared::LoaderError;

use super::{LoaderDocument, SpinnerContainer, SubmitButton, SubmitTarget};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub label: String,
    pub disabled: bool,
}

/// What the document looked like when a form was submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub form_id: String,
    pub buttons: HashMap<String, ButtonState>,
    pub containers: HashMap<String, String>,
}

#[derive(Default)]
struct State {
    containers: HashMap<String, String>,
    buttons: HashMap<String, ButtonState>,
    forms: HashSet<String>,
    texts: HashMap<String, String>,
    rejecting_forms: HashSet<String>,
    submissions: Vec<Submission>,
}

/// In-memory document recording every submission.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    state: Rc<RefCell<State>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(self, id: &str, html: &str) -> Self {
        self.state
            .borrow_mut()
            .containers
            .insert(id.to_string(), html.to_string());
        self
    }

    pub fn with_button(self, id: &str, label: &str) -> Self {
        self.state.borrow_mut().buttons.insert(
            id.to_string(),
            ButtonState {
                label: label.to_string(),
                disabled: false,
            },
        );
        self
    }

    pub fn with_form(self, id: &str) -> Self {
        self.state.borrow_mut().forms.insert(id.to_string());
        self
    }

    /// Form whose submit call is refused by the host.
    pub fn with_rejecting_form(self, id: &str) -> Self {
        {
            let mut state = self.state.borrow_mut();
            state.forms.insert(id.to_string());
            state.rejecting_forms.insert(id.to_string());
        }
        self
    }

    pub fn with_text(self, id: &str, text: &str) -> Self {
        self.state
            .borrow_mut()
            .texts
            .insert(id.to_string(), text.to_string());
        self
    }

    pub fn container_html(&self, id: &str) -> String {
        self.state.borrow().containers[id].clone()
    }

    pub fn button_state(&self, id: &str) -> ButtonState {
        self.state.borrow().buttons[id].clone()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.state.borrow().submissions.clone()
    }
}

pub struct MemoryContainer {
    id: String,
    state: Rc<RefCell<State>>,
}

impl SpinnerContainer for MemoryContainer {
    fn inner_html(&self) -> String {
        self.state.borrow().containers[&self.id].clone()
    }

    fn set_inner_html(&self, html: &str) {
        self.state
            .borrow_mut()
            .containers
            .insert(self.id.clone(), html.to_string());
    }
}

pub struct MemoryButton {
    id: String,
    state: Rc<RefCell<State>>,
}

impl SubmitButton for MemoryButton {
    fn set_label(&self, label: &str) {
        if let Some(button) = self.state.borrow_mut().buttons.get_mut(&self.id) {
            button.label = label.to_string();
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.state.borrow_mut().buttons.get_mut(&self.id) {
            button.disabled = disabled;
        }
    }
}

pub struct MemoryForm {
    id: String,
    state: Rc<RefCell<State>>,
}

impl SubmitTarget for MemoryForm {
    fn submit(&self) -> Result<(), LoaderError> {
        let mut state = self.state.borrow_mut();
        if state.rejecting_forms.contains(&self.id) {
            return Err(LoaderError::Submit("submission blocked".to_string()));
        }
        let submission = Submission {
            form_id: self.id.clone(),
            buttons: state.buttons.clone(),
            containers: state.containers.clone(),
        };
        state.submissions.push(submission);
        Ok(())
    }
}

impl LoaderDocument for MemoryDocument {
    type Container = MemoryContainer;
    type Button = MemoryButton;
    type Form = MemoryForm;

    fn container(&self, id: &str) -> Option<MemoryContainer> {
        self.state
            .borrow()
            .containers
            .contains_key(id)
            .then(|| MemoryContainer {
                id: id.to_string(),
                state: Rc::clone(&self.state),
            })
    }

    fn button(&self, id: &str) -> Option<MemoryButton> {
        self.state
            .borrow()
            .buttons
            .contains_key(id)
            .then(|| MemoryButton {
                id: id.to_string(),
                state: Rc::clone(&self.state),
            })
    }

    fn form(&self, id: &str) -> Option<MemoryForm> {
        self.state.borrow().forms.contains(id).then(|| MemoryForm {
            id: id.to_string(),
            state: Rc::clone(&self.state),
        })
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.state.borrow().texts.get(id).cloned()
    }
}
