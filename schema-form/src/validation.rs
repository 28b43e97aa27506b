//! Field validation and live feedback.

use tracing::debug;

use crate::dom::NodeId;
use crate::events::EventKind;
use crate::page::FormPage;
use crate::{FormTransport, InputType, StatusStyle};

pub const EMAIL_EXPECTED_MESSAGE: &str = "I am expecting an email address!";

impl<T: FormTransport> FormPage<T> {
    /// Validate one control and report the result.
    ///
    /// An invalid control gets the `error` class and its validation message
    /// goes to the status area. A valid one loses the class, its inline alert,
    /// and clears the status area.
    pub fn validate_input(&mut self, control: NodeId) -> bool {
        if self.check_validity(control) {
            self.document.remove_class(control, "error");
            self.remove_inline_alert(control);
            self.clear_status();
            true
        } else {
            self.document.add_class(control, "error");
            let message = self.document.validation_message(control);
            self.set_status(message, StatusStyle::Error);
            false
        }
    }

    /// Evaluate a control's constraints, firing `invalid` if any is violated.
    pub fn check_validity(&mut self, control: NodeId) -> bool {
        let valid = self.document.validity(control).valid();
        if !valid {
            self.dispatch(control, EventKind::Invalid);
        }
        valid
    }

    /// Live-input handler: keep the custom validity message in step with the value.
    ///
    /// Only one message class applies, picked by what the field declares:
    /// required first, then pattern, then the email type.
    pub(crate) fn refresh_custom_validity(&mut self, control: NodeId, field: usize) {
        let Some(question) = self.fields.get(field) else {
            return;
        };
        let validity = self.document.validity(control);
        let label = question.display_label();

        let message = if question.required {
            validity
                .value_missing
                .then(|| format!("Please enter {label}."))
        } else if question.pattern().is_some() {
            validity.pattern_mismatch.then(|| format!("Invalid {label}."))
        } else if question.kind() == InputType::Email {
            validity
                .type_mismatch
                .then(|| EMAIL_EXPECTED_MESSAGE.to_string())
        } else {
            return;
        };

        self.document
            .set_custom_validity(control, message.unwrap_or_default());
    }

    /// Invalid handler: show the current validation message in an assertive
    /// alert next to the control, reusing the control's existing alert.
    pub(crate) fn show_inline_alert(&mut self, control: NodeId) {
        let message = self.document.validation_message(control);
        let alert = match self.alerts.get(&control) {
            Some(&alert) => alert,
            None => {
                let alert = self.document.create_element("div");
                self.document.set_attribute(alert, "role", "alert");
                self.document.set_attribute(alert, "aria-live", "assertive");
                self.alerts.insert(control, alert);
                alert
            }
        };
        self.document.set_text(alert, message);
        if !self.document.is_connected(alert) {
            match self.document.parent(control) {
                Some(parent) => self.document.append_child(parent, alert),
                None => self.document.insert_after(control, alert),
            }
        }
        debug!(?control, "Showing inline alert");
    }

    fn remove_inline_alert(&mut self, control: NodeId) {
        if let Some(alert) = self.alerts.remove(&control) {
            self.document.discard(alert);
        }
    }
}
