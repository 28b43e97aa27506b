pub const LOAD_ERROR_MESSAGE: &str = "Error loading form questions.";
pub const CORRECT_ERRORS_MESSAGE: &str = "Please correct the errors before submitting.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Visual style of the status area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Error,
    Success,
}

impl StatusStyle {
    /// The CSS color used for this style.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Error => "red",
            Self::Success => "green",
        }
    }
}

/// What the status area currently shows.
///
/// Overwritten on every event. Clearing empties the text but keeps the last
/// style, the way the status element keeps its color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub style: Option<StatusStyle>,
}

impl StatusMessage {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_error(&self) -> bool {
        !self.is_empty() && self.style == Some(StatusStyle::Error)
    }

    pub fn is_success(&self) -> bool {
        !self.is_empty() && self.style == Some(StatusStyle::Success)
    }

    pub fn set(&mut self, text: impl Into<String>, style: StatusStyle) {
        self.text = text.into();
        self.style = Some(style);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
