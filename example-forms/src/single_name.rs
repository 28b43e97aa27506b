use schema_form_types::{FieldDescriptor, FormSchema};

/// One required text field called `name`.
pub fn single_name() -> FormSchema {
    FormSchema::new(vec![FieldDescriptor::input("name", "text", "Name").required()])
}
