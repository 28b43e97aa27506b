//! Form submission.

use tracing::{debug, error, info};

use crate::page::FormPage;
use crate::{
    CORRECT_ERRORS_MESSAGE, FormTransport, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
    StatusStyle, SubmissionPayload,
};

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// At least one control failed validation; nothing was sent.
    Invalid,
    /// The payload was accepted and the form was reset.
    Submitted(SubmissionPayload),
    /// The payload was sent but the request failed.
    Failed,
    /// No submit listener was registered.
    Unhandled,
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

impl<T: FormTransport> FormPage<T> {
    /// Validate every control, then post the payload.
    ///
    /// Every control is validated (no short-circuit) so each one's error state
    /// is up to date, not just the first failing one.
    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let mut all_valid = true;
        for control in self.controls() {
            all_valid &= self.validate_input(control);
        }

        if !all_valid {
            self.set_status(CORRECT_ERRORS_MESSAGE, StatusStyle::Error);
            return SubmitOutcome::Invalid;
        }

        let payload = self.collect_payload();
        debug!(fields = payload.len(), "Submitting form");

        match self.transport.submit(&payload).await {
            Ok(()) => {
                info!("Form submitted");
                self.set_status(SUBMIT_SUCCESS_MESSAGE, StatusStyle::Success);
                self.document.reset(self.form);
                SubmitOutcome::Submitted(payload)
            }
            Err(err) => {
                error!(error = %err, "Error submitting form");
                self.set_status(SUBMIT_FAILED_MESSAGE, StatusStyle::Error);
                SubmitOutcome::Failed
            }
        }
    }

    /// Current form values, the way a browser collects form data.
    ///
    /// Nameless and disabled controls are skipped, and radios only count when
    /// checked.
    pub fn collect_payload(&self) -> SubmissionPayload {
        let document = &self.document;
        let mut payload = SubmissionPayload::new();
        for control in self.controls() {
            let name = document.attribute(control, "name").unwrap_or_default();
            if name.is_empty() || document.has_attribute(control, "disabled") {
                continue;
            }
            if document.is_radio(control) && !document.is_checked(control) {
                continue;
            }
            payload.insert(name, document.value(control).unwrap_or_default());
        }
        payload
    }
}
