//! Schemas the renderer has to cope with.

use schema_form_types::{FieldDescriptor, FormSchema};

/// A radio group with no `options` between two text fields.
pub fn radio_without_options() -> FormSchema {
    let mut color = FieldDescriptor::radio("color", "Color", Vec::new());
    color.options = None;
    FormSchema::new(vec![
        FieldDescriptor::input("first", "text", "First"),
        color,
        FieldDescriptor::input("last", "text", "Last"),
    ])
}

/// Two fields sharing the id `name`.
pub fn with_duplicate_ids() -> FormSchema {
    FormSchema::new(vec![
        FieldDescriptor::input("name", "text", "Name").required(),
        FieldDescriptor::input("alias", "text", "Alias").with_id("name"),
    ])
}
