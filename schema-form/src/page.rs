//! The form page: the context object every component works through.
//!
//! A `FormPage` owns its UI tree, its status area and its listener table, so
//! several pages can coexist without sharing anything.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::dom::{Document, NodeId};
use crate::events::{DispatchTable, EventKind, Listener};
use crate::submit::SubmitOutcome;
use crate::{FieldDescriptor, FormTransport, StatusMessage, StatusStyle};

pub const FORM_ID: &str = "user-form";
pub const CONTAINER_ID: &str = "form-container";
pub const STATUS_ID: &str = "status-message";

/// Error type for driving a page by element id.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("No element with id '{0}'")]
    UnknownElement(String),

    #[error("Element '{0}' is not a form control")]
    NotAControl(String),
}

/// One rendered form, its status area, and the transport it talks through.
pub struct FormPage<T> {
    pub(crate) transport: T,
    pub(crate) document: Document,
    pub(crate) form: NodeId,
    pub(crate) container: NodeId,
    pub(crate) status_node: NodeId,
    pub(crate) status: StatusMessage,
    /// Descriptors as rendered, indexed by `Listener::LiveInput::field`.
    pub(crate) fields: Vec<FieldDescriptor>,
    pub(crate) listeners: DispatchTable,
    /// Inline alert shown for each control, if any.
    pub(crate) alerts: HashMap<NodeId, NodeId>,
}

impl<T: FormTransport> FormPage<T> {
    /// Build the page skeleton: a form holding the field container and a submit
    /// button, followed by the status area.
    pub fn new(transport: T) -> Self {
        let mut document = Document::new();
        let root = document.root();

        let form = document.create_element("form");
        document.set_attribute(form, "id", FORM_ID);
        document.append_child(root, form);

        let container = document.create_element("div");
        document.set_attribute(container, "id", CONTAINER_ID);
        document.append_child(form, container);

        let button = document.create_element("button");
        document.set_attribute(button, "type", "submit");
        document.set_text(button, "Submit");
        document.append_child(form, button);

        let status_node = document.create_element("p");
        document.set_attribute(status_node, "id", STATUS_ID);
        document.set_attribute(status_node, "aria-live", "polite");
        document.append_child(root, status_node);

        let mut listeners = DispatchTable::new();
        listeners.add(form, EventKind::Submit, Listener::SubmitForm);

        Self {
            transport,
            document,
            form,
            container,
            status_node,
            status: StatusMessage::default(),
            fields: Vec::new(),
            listeners,
            alerts: HashMap::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn status_node(&self) -> NodeId {
        self.status_node
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    /// Descriptors currently rendered, in order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Wrapper nodes currently in the container.
    pub fn wrappers(&self) -> &[NodeId] {
        self.document.children(self.container)
    }

    /// All controls of the form, in form order.
    pub fn controls(&self) -> Vec<NodeId> {
        self.document.controls(self.form)
    }

    /// The inline alert currently shown for a control.
    pub fn alert_for(&self, control: NodeId) -> Option<NodeId> {
        self.alerts.get(&control).copied()
    }

    /// Look up a form control by its id.
    pub fn control(&self, id: &str) -> Result<NodeId, PageError> {
        let node = self
            .document
            .element_by_id(id)
            .ok_or_else(|| PageError::UnknownElement(id.to_string()))?;
        if !self.document.is_control(node) {
            return Err(PageError::NotAControl(id.to_string()));
        }
        Ok(node)
    }

    // === Status area ===

    pub(crate) fn set_status(&mut self, text: impl Into<String>, style: StatusStyle) {
        self.status.set(text, style);
        self.sync_status();
    }

    pub(crate) fn clear_status(&mut self) {
        self.status.clear();
        self.sync_status();
    }

    fn sync_status(&mut self) {
        self.document.set_text(self.status_node, self.status.text.clone());
        if let Some(style) = self.status.style {
            self.document
                .set_attribute(self.status_node, "style", format!("color: {}", style.color()));
        }
    }

    // === User interaction ===

    /// Replace a control's value as if typed, then fire `input`.
    pub fn type_text(&mut self, id: &str, text: &str) -> Result<(), PageError> {
        let node = self.control(id)?;
        self.document.set_value(node, text);
        self.dispatch(node, EventKind::Input);
        Ok(())
    }

    /// Move focus away from a control, firing `blur`.
    pub fn blur(&mut self, id: &str) -> Result<(), PageError> {
        let node = self.control(id)?;
        self.dispatch(node, EventKind::Blur);
        Ok(())
    }

    /// Check a radio, unchecking its siblings, then fire `input`.
    pub fn select_radio(&mut self, id: &str) -> Result<(), PageError> {
        let node = self.control(id)?;
        self.document.set_checked(node, true);
        self.dispatch(node, EventKind::Input);
        Ok(())
    }

    /// Submit the form through its registered submit listeners.
    ///
    /// Returns `SubmitOutcome::Unhandled` when nothing listens for submit.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let mut outcome = SubmitOutcome::Unhandled;
        for listener in self.listeners.listeners(self.form, EventKind::Submit) {
            if listener == Listener::SubmitForm {
                outcome = self.submit_form().await;
            }
        }
        outcome
    }

    /// Run the synchronous listeners registered for `kind` on `node`.
    pub fn dispatch(&mut self, node: NodeId, kind: EventKind) {
        let listeners = self.listeners.listeners(node, kind);
        if !listeners.is_empty() {
            debug!(?node, ?kind, count = listeners.len(), "Dispatching event");
        }
        for listener in listeners {
            match listener {
                Listener::LiveInput { field } => self.refresh_custom_validity(node, field),
                Listener::InlineAlert => self.show_inline_alert(node),
                Listener::ValidateOnBlur => {
                    self.validate_input(node);
                }
                // Submission is asynchronous and goes through `submit`.
                Listener::SubmitForm => {}
            }
        }
    }
}
