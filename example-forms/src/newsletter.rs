use schema_form_types::{FieldDescriptor, FormSchema, RadioOption};

/// Optional fields only, so an untouched form is valid.
pub fn newsletter() -> FormSchema {
    FormSchema::new(vec![
        FieldDescriptor::input("email", "email", "Email address"),
        FieldDescriptor::input("homepage", "url", "Homepage"),
        FieldDescriptor::radio(
            "frequency",
            "How often?",
            vec![
                RadioOption::new("daily", "frequency-daily", "Daily"),
                RadioOption::new("weekly", "frequency-weekly", "Weekly"),
                RadioOption::new("monthly", "frequency-monthly", "Monthly"),
            ],
        ),
    ])
}
