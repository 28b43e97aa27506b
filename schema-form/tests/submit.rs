//! Submitting rendered forms.

use example_forms::{contact, newsletter, single_name};
use schema_form::{
    CORRECT_ERRORS_MESSAGE, FormPage, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
    SubmitOutcome, TestTransport,
};

#[tokio::test]
async fn ann_is_submitted_and_cleared() {
    let mut page = FormPage::new(TestTransport::new().with_schema(single_name()));
    page.render_form().await.unwrap();

    assert_eq!(page.wrappers().len(), 1);
    let name = page.control("name").unwrap();
    page.type_text("name", "Ann").unwrap();

    let outcome = page.submit().await;

    let submissions = page.transport().submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(submissions[0].to_json().unwrap(), r#"{"name":"Ann"}"#);
    assert!(outcome.is_submitted());
    assert_eq!(page.status().text, SUBMIT_SUCCESS_MESSAGE);
    assert_eq!(
        page.document().attribute(page.status_node(), "style"),
        Some("color: green")
    );
    assert_eq!(page.document().value(name), Some(""));
}

#[tokio::test]
async fn payload_keys_and_values_match_controls() {
    let mut page = FormPage::new(TestTransport::new().with_schema(contact()));
    page.render_form().await.unwrap();
    page.type_text("name", "Ann").unwrap();
    page.type_text("email", "ann@example.com").unwrap();
    page.select_radio("contact-phone").unwrap();

    let SubmitOutcome::Submitted(payload) = page.submit().await else {
        panic!("expected a submission");
    };

    assert_eq!(
        payload.names().collect::<Vec<_>>(),
        vec!["contact_method", "email", "message", "name", "phone"]
    );
    assert_eq!(payload.get("name"), Some("Ann"));
    assert_eq!(payload.get("email"), Some("ann@example.com"));
    assert_eq!(payload.get("contact_method"), Some("phone"));
    assert_eq!(payload.get("phone"), Some(""));
    assert_eq!(page.transport().submissions(), vec![payload]);
}

#[tokio::test]
async fn server_error_keeps_values() {
    let mut page = FormPage::new(
        TestTransport::new()
            .with_schema(single_name())
            .with_submit_status(500),
    );
    page.render_form().await.unwrap();
    page.type_text("name", "Ann").unwrap();

    assert_eq!(page.submit().await, SubmitOutcome::Failed);

    assert_eq!(page.transport().submissions().len(), 1);
    assert_eq!(page.status().text, SUBMIT_FAILED_MESSAGE);
    let name = page.control("name").unwrap();
    assert_eq!(page.document().value(name), Some("Ann"));
}

#[tokio::test]
async fn invalid_form_sends_nothing() {
    let mut page = FormPage::new(TestTransport::new().with_schema(contact()));
    page.render_form().await.unwrap();
    page.type_text("name", "Ann").unwrap();

    assert_eq!(page.submit().await, SubmitOutcome::Invalid);

    assert!(page.transport().submissions().is_empty());
    assert_eq!(page.status().text, CORRECT_ERRORS_MESSAGE);
    let email = page.control("email").unwrap();
    assert!(page.document().has_class(email, "error"));
}

#[tokio::test]
async fn untouched_optional_form_submits_empty_values() {
    let mut page = FormPage::new(TestTransport::new().with_schema(newsletter()));
    page.render_form().await.unwrap();

    let SubmitOutcome::Submitted(payload) = page.submit().await else {
        panic!("expected a submission");
    };

    assert_eq!(payload.get("email"), Some(""));
    assert_eq!(payload.get("homepage"), Some(""));
    assert!(!payload.contains("frequency"));
}

#[tokio::test]
async fn resubmitting_after_success_needs_new_input() {
    let mut page = FormPage::new(TestTransport::new().with_schema(single_name()));
    page.render_form().await.unwrap();
    page.type_text("name", "Ann").unwrap();
    assert!(page.submit().await.is_submitted());

    assert_eq!(page.submit().await, SubmitOutcome::Invalid);
    assert_eq!(page.transport().submissions().len(), 1);
}
