use std::fmt;

use serde::{Deserialize, Serialize};

/// A single form control as described by the fetched schema.
///
/// Deserialization is lenient: every key is optional and falls back to its
/// default. The schema is trusted as-is, so a descriptor that is missing data
/// the renderer needs only fails once it is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDescriptor {
    /// Form-field key used in the submission payload.
    pub name: String,

    /// The control type, copied verbatim onto the rendered control.
    /// `"radio"` selects the radio group builder.
    #[serde(rename = "type")]
    pub input_type: String,

    /// Label text for input fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Legend text for radio groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<String>,

    /// DOM identifier of the rendered control.
    pub id: String,

    /// Whether a value is required.
    pub required: bool,

    /// Optional validation pattern (matched against the whole value).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Options for radio groups, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<RadioOption>>,
}

impl FieldDescriptor {
    /// Create an input descriptor whose id and name are the same.
    pub fn input(
        name: impl Into<String>,
        input_type: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            input_type: input_type.into(),
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Create a radio group descriptor.
    pub fn radio(name: impl Into<String>, legend: impl Into<String>, options: Vec<RadioOption>) -> Self {
        Self {
            name: name.into(),
            input_type: "radio".to_string(),
            legend: Some(legend.into()),
            options: Some(options),
            ..Default::default()
        }
    }

    /// Use a different DOM id than the name.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a validation pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Check if this descriptor renders as a radio group.
    pub fn is_radio(&self) -> bool {
        self.input_type == "radio"
    }

    /// The classified control type.
    pub fn kind(&self) -> InputType {
        InputType::parse(&self.input_type)
    }

    /// The pattern, if present and non-empty.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// Text used when talking about this field in messages.
    ///
    /// Falls back from label to legend to name.
    pub fn display_label(&self) -> &str {
        self.label
            .as_deref()
            .or(self.legend.as_deref())
            .unwrap_or(&self.name)
    }
}

/// One choice of a radio group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioOption {
    /// Submitted value when this option is checked.
    pub value: String,
    /// DOM identifier of the radio control.
    pub id: String,
    /// Label text.
    pub label: String,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Classification of a control's `type` string.
///
/// Unknown types are kept verbatim in `Other` and validate like text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Email,
    Url,
    Password,
    Tel,
    Search,
    Number,
    Radio,
    Other(String),
}

/// Types for which the `pattern` constraint does not apply.
const PATTERNLESS_TYPES: &[&str] = &[
    "date",
    "time",
    "datetime-local",
    "month",
    "week",
    "color",
    "range",
    "checkbox",
    "file",
    "hidden",
];

/// Types for which the `required` constraint does not apply.
const BARRED_FROM_REQUIRED: &[&str] = &["hidden", "range", "color"];

impl InputType {
    /// Classify a type string (case-insensitive, like HTML).
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "" | "text" => Self::Text,
            "email" => Self::Email,
            "url" => Self::Url,
            "password" => Self::Password,
            "tel" => Self::Tel,
            "search" => Self::Search,
            "number" => Self::Number,
            "radio" => Self::Radio,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Url => "url",
            Self::Password => "password",
            Self::Tel => "tel",
            Self::Search => "search",
            Self::Number => "number",
            Self::Radio => "radio",
            Self::Other(raw) => raw,
        }
    }

    /// Check if the `pattern` constraint applies to this type.
    pub fn supports_pattern(&self) -> bool {
        match self {
            Self::Number | Self::Radio => false,
            Self::Other(raw) => !PATTERNLESS_TYPES.contains(&raw.as_str()),
            _ => true,
        }
    }

    /// Check if the `required` constraint applies to this type.
    pub fn supports_required(&self) -> bool {
        match self {
            Self::Other(raw) => !BARRED_FROM_REQUIRED.contains(&raw.as_str()),
            _ => true,
        }
    }
}

impl From<&str> for InputType {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_input_descriptor() {
        let json = r#"{"type":"email","id":"mail","name":"mail","label":"E-Mail","required":true}"#;
        let descriptor: FieldDescriptor = serde_json::from_str(json).unwrap();

        assert_eq!(descriptor.kind(), InputType::Email);
        assert_eq!(descriptor.display_label(), "E-Mail");
        assert!(descriptor.required);
        assert!(descriptor.pattern().is_none());
    }

    #[test]
    fn deserializes_radio_descriptor() {
        let json = r#"{
            "type": "radio",
            "name": "gender",
            "legend": "Gender",
            "required": true,
            "options": [
                {"value": "f", "id": "gender-f", "label": "Female"},
                {"value": "m", "id": "gender-m", "label": "Male"}
            ]
        }"#;
        let descriptor: FieldDescriptor = serde_json::from_str(json).unwrap();

        assert!(descriptor.is_radio());
        assert_eq!(descriptor.options.as_ref().unwrap().len(), 2);
        assert_eq!(descriptor.display_label(), "Gender");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let descriptor: FieldDescriptor = serde_json::from_str("{}").unwrap();
        assert_eq!(descriptor, FieldDescriptor::default());
        assert_eq!(descriptor.kind(), InputType::Text);
    }

    #[test]
    fn empty_pattern_is_ignored() {
        let descriptor = FieldDescriptor::input("zip", "text", "Zip").with_pattern("");
        assert!(descriptor.pattern().is_none());
    }

    #[test]
    fn unknown_types_are_kept_verbatim() {
        let kind = InputType::parse("colour-wheel");
        assert_eq!(kind, InputType::Other("colour-wheel".to_string()));
        assert_eq!(kind.to_string(), "colour-wheel");
        assert!(kind.supports_pattern());
        assert!(!InputType::parse("date").supports_pattern());
        assert!(!InputType::parse("hidden").supports_required());
    }
}
