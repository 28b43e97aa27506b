use schema_form_types::{FieldDescriptor, FormSchema, RadioOption};

/// Registration for a workshop: ids differ from names, and there is a field
/// type the renderer does not know.
pub fn event_registration() -> FormSchema {
    FormSchema::new(vec![
        FieldDescriptor::input("full_name", "text", "Full name")
            .with_id("attendee-name")
            .required(),
        FieldDescriptor::input("ticket", "text", "Ticket code")
            .with_id("attendee-ticket")
            .required()
            .with_pattern("[A-Z]{3}-[0-9]{4}"),
        FieldDescriptor::radio(
            "session",
            "Session",
            vec![
                RadioOption::new("morning", "session-am", "Morning"),
                RadioOption::new("afternoon", "session-pm", "Afternoon"),
            ],
        )
        .required(),
        FieldDescriptor::input("arrival", "date", "Arrival date").with_id("attendee-arrival"),
    ])
}
