//! Declarative constraint validation.
//!
//! A control declares `required`, `pattern` and a type; its value is checked
//! against those explicitly. Radio groups compute `value_missing` across the
//! whole group, so callers pass that in.

use std::sync::LazyLock;

use regex::Regex;

use crate::InputType;

pub const VALUE_MISSING_MESSAGE: &str = "Please fill out this field.";
pub const RADIO_VALUE_MISSING_MESSAGE: &str = "Please select one of these options.";
pub const PATTERN_MISMATCH_MESSAGE: &str = "Please match the requested format.";
pub const EMAIL_MISMATCH_MESSAGE: &str = "Please enter an email address.";
pub const URL_MISMATCH_MESSAGE: &str = "Please enter a URL.";

/// The WHATWG "valid e-mail address" production.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email grammar is a valid regex")
});

/// Check a value against the e-mail address grammar.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Which constraints are currently violated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityState {
    pub value_missing: bool,
    pub pattern_mismatch: bool,
    pub type_mismatch: bool,
    pub custom_error: bool,
}

impl ValidityState {
    pub fn valid(&self) -> bool {
        !(self.value_missing || self.pattern_mismatch || self.type_mismatch || self.custom_error)
    }
}

/// The constraint set declared on one control.
#[derive(Debug, Clone)]
pub struct ControlConstraints {
    input_type: InputType,
    required: bool,
    /// Anchored `pattern`, with lookaround and backreferences.
    pattern: Option<fancy_regex::Regex>,
}

impl ControlConstraints {
    /// Build the constraint set from a control's declared attributes.
    ///
    /// A pattern that does not compile is ignored, so the control simply has no
    /// pattern constraint.
    pub fn new(input_type: InputType, required: bool, pattern: Option<&str>) -> Self {
        let pattern = pattern.filter(|p| !p.is_empty()).and_then(|p| {
            fancy_regex::Regex::new(&format!("^(?:{p})$"))
                .inspect_err(|error| tracing::warn!(pattern = p, %error, "Ignoring invalid pattern"))
                .ok()
        });
        Self {
            input_type,
            required,
            pattern,
        }
    }

    pub fn input_type(&self) -> &InputType {
        &self.input_type
    }

    pub fn is_required(&self) -> bool {
        self.required && self.input_type.supports_required()
    }

    pub fn has_pattern(&self) -> bool {
        self.pattern.is_some() && self.input_type.supports_pattern()
    }

    /// Evaluate a text-like control's value.
    pub fn check(&self, value: &str, custom_validity: &str) -> ValidityState {
        let empty = value.is_empty();
        ValidityState {
            value_missing: self.is_required() && empty,
            pattern_mismatch: !empty
                && self.input_type.supports_pattern()
                && self.pattern.as_ref().is_some_and(|re| !pattern_matches(re, value)),
            type_mismatch: !empty && self.type_mismatch(value),
            custom_error: !custom_validity.is_empty(),
        }
    }

    /// Evaluate one radio of a group, given whether any radio in the group is checked.
    pub fn check_radio(&self, group_checked: bool, custom_validity: &str) -> ValidityState {
        ValidityState {
            value_missing: self.required && !group_checked,
            custom_error: !custom_validity.is_empty(),
            ..Default::default()
        }
    }

    /// The message a browser would show for the given validity.
    ///
    /// Empty when the control is valid.
    pub fn validation_message(&self, validity: &ValidityState, custom_validity: &str) -> String {
        if validity.custom_error {
            custom_validity.to_string()
        } else if validity.value_missing {
            match self.input_type {
                InputType::Radio => RADIO_VALUE_MISSING_MESSAGE.to_string(),
                _ => VALUE_MISSING_MESSAGE.to_string(),
            }
        } else if validity.type_mismatch {
            match self.input_type {
                InputType::Url => URL_MISMATCH_MESSAGE.to_string(),
                _ => EMAIL_MISMATCH_MESSAGE.to_string(),
            }
        } else if validity.pattern_mismatch {
            PATTERN_MISMATCH_MESSAGE.to_string()
        } else {
            String::new()
        }
    }

    fn type_mismatch(&self, value: &str) -> bool {
        match self.input_type {
            InputType::Email => !is_valid_email(value),
            InputType::Url => url::Url::parse(value).is_err(),
            _ => false,
        }
    }
}

/// A pattern that gives up (backtrack limit) counts as not matching.
fn pattern_matches(pattern: &fancy_regex::Regex, value: &str) -> bool {
    pattern
        .is_match(value)
        .inspect_err(|error| tracing::warn!(%error, "Pattern match aborted"))
        .unwrap_or(false)
}
