//! Field validation and the shared status area.

use example_forms::{contact, event_registration, newsletter};
use schema_form::{
    EMAIL_EXPECTED_MESSAGE, FieldDescriptor, FormPage, FormSchema, PATTERN_MISMATCH_MESSAGE,
    RADIO_VALUE_MISSING_MESSAGE, TestTransport, URL_MISMATCH_MESSAGE, VALUE_MISSING_MESSAGE,
};

async fn page_for(schema: FormSchema) -> FormPage<TestTransport> {
    let mut page = FormPage::new(TestTransport::new().with_schema(schema));
    page.render_form().await.unwrap();
    page
}

#[tokio::test]
async fn empty_required_field_is_invalid_until_filled() {
    let mut page = page_for(contact()).await;
    let name = page.control("name").unwrap();

    assert!(!page.validate_input(name));
    assert!(!page.status().text.is_empty());
    assert_eq!(page.status().text, VALUE_MISSING_MESSAGE);
    assert!(page.document().has_class(name, "error"));

    page.type_text("name", "Ann").unwrap();

    assert!(page.validate_input(name));
    assert!(page.status().is_empty());
    assert!(!page.document().has_class(name, "error"));
}

#[tokio::test]
async fn live_message_replaces_native_one_after_typing() {
    let mut page = page_for(contact()).await;
    let name = page.control("name").unwrap();

    page.type_text("name", "").unwrap();
    page.blur("name").unwrap();

    assert_eq!(page.status().text, "Please enter Name.");
    let alert = page.alert_for(name).unwrap();
    assert_eq!(page.document().text_content(alert), "Please enter Name.");
}

#[tokio::test]
async fn pattern_must_match_whole_value() {
    let mut page = page_for(event_registration()).await;
    let ticket = page.control("attendee-ticket").unwrap();

    page.type_text("attendee-ticket", "XABC-1234").unwrap();
    assert!(!page.validate_input(ticket));

    page.type_text("attendee-ticket", "ABC-1234").unwrap();
    assert!(page.validate_input(ticket));
}

#[tokio::test]
async fn pattern_message_for_optional_field() {
    let mut page = page_for(contact()).await;
    let phone = page.control("phone").unwrap();

    page.type_text("phone", "call me").unwrap();
    page.blur("phone").unwrap();
    assert_eq!(page.status().text, "Invalid Phone.");

    // Empty optional fields never fail a pattern.
    page.type_text("phone", "").unwrap();
    assert!(page.validate_input(phone));
}

#[tokio::test]
async fn email_type_is_checked() {
    let mut page = page_for(newsletter()).await;
    let email = page.control("email").unwrap();

    page.type_text("email", "not-an-address").unwrap();
    assert!(!page.validate_input(email));
    assert_eq!(page.status().text, EMAIL_EXPECTED_MESSAGE);

    page.type_text("email", "ann@example.com").unwrap();
    assert!(page.validate_input(email));
}

#[tokio::test]
async fn url_type_uses_native_message() {
    let mut page = page_for(newsletter()).await;
    let homepage = page.control("homepage").unwrap();

    page.type_text("homepage", "example dot com").unwrap();
    assert!(!page.validate_input(homepage));
    assert_eq!(page.status().text, URL_MISMATCH_MESSAGE);

    page.type_text("homepage", "https://example.com").unwrap();
    assert!(page.validate_input(homepage));
}

#[tokio::test]
async fn required_radio_group_needs_a_selection() {
    let mut page = page_for(contact()).await;
    let email = page.control("contact-email").unwrap();

    assert!(!page.validate_input(email));
    assert_eq!(page.status().text, RADIO_VALUE_MISSING_MESSAGE);

    page.select_radio("contact-phone").unwrap();
    assert!(page.validate_input(email));
}

#[tokio::test]
async fn alert_is_reused_and_removed() {
    let mut page = page_for(contact()).await;
    let name = page.control("name").unwrap();

    page.blur("name").unwrap();
    let first = page.alert_for(name).unwrap();
    page.blur("name").unwrap();
    assert_eq!(page.alert_for(name), Some(first));

    page.type_text("name", "Ann").unwrap();
    page.blur("name").unwrap();
    assert!(page.alert_for(name).is_none());
    assert!(!page.document().is_connected(first));
}

#[tokio::test]
async fn lookahead_pattern_rejects_short_password() {
    let mut page = page_for(FormSchema::new(vec![
        FieldDescriptor::input("secret", "password", "Password")
            .required()
            .with_pattern("(?=.*[0-9]).{8,}"),
    ]))
    .await;
    let secret = page.control("secret").unwrap();

    page.type_text("secret", "abc").unwrap();
    assert!(!page.validate_input(secret));
    assert_eq!(page.status().text, PATTERN_MISMATCH_MESSAGE);

    page.type_text("secret", "abcdefg1").unwrap();
    assert!(page.validate_input(secret));
}

#[tokio::test]
async fn repeated_feedback_does_not_grow_the_tree() {
    let mut page = page_for(contact()).await;

    // One full cycle so the alert and status text exist once.
    page.type_text("name", "").unwrap();
    page.blur("name").unwrap();
    page.type_text("name", "Ann").unwrap();
    page.blur("name").unwrap();
    let len = page.document().arena_len();

    for _ in 0..1_000 {
        page.type_text("name", "").unwrap();
        page.blur("name").unwrap();
        page.type_text("name", "Ann").unwrap();
        page.blur("name").unwrap();
    }

    assert_eq!(page.document().arena_len(), len);
}
