//! A contact form as the form service serves it.

use schema_form_types::{FieldDescriptor, FormSchema, RadioOption};

/// Wire form of [`contact`].
pub const CONTACT_JSON: &str = r#"[
  { "type": "text", "id": "name", "name": "name", "label": "Name", "required": true },
  { "type": "email", "id": "email", "name": "email", "label": "Email", "required": true },
  { "type": "tel", "id": "phone", "name": "phone", "label": "Phone", "pattern": "[0-9 +()-]{6,20}" },
  {
    "type": "radio",
    "name": "contact_method",
    "legend": "Preferred contact method",
    "required": true,
    "options": [
      { "value": "email", "id": "contact-email", "label": "Email" },
      { "value": "phone", "id": "contact-phone", "label": "Phone" }
    ]
  },
  { "type": "text", "id": "message", "name": "message", "label": "Message" }
]"#;

pub fn contact() -> FormSchema {
    FormSchema::new(vec![
        FieldDescriptor::input("name", "text", "Name").required(),
        FieldDescriptor::input("email", "email", "Email").required(),
        FieldDescriptor::input("phone", "tel", "Phone").with_pattern("[0-9 +()-]{6,20}"),
        FieldDescriptor::radio(
            "contact_method",
            "Preferred contact method",
            vec![
                RadioOption::new("email", "contact-email", "Email"),
                RadioOption::new("phone", "contact-phone", "Phone"),
            ],
        )
        .required(),
        FieldDescriptor::input("message", "text", "Message"),
    ])
}
