//! Test transport for driving pages without a network.
//!
//! `TestTransport` serves a canned schema (or a canned failure) and records
//! every payload it is asked to submit.
//!
//! # Example
//!
//! ```rust,ignore
//! use schema_form::{FieldDescriptor, FormPage, TestTransport};
//!
//! let transport = TestTransport::new()
//!     .with_questions(vec![FieldDescriptor::input("name", "text", "Name").required()]);
//! let mut page = FormPage::new(transport);
//! page.render_form().await?;
//!
//! page.type_text("name", "Ann")?;
//! assert!(page.submit().await.is_submitted());
//! assert_eq!(page.transport().submissions()[0].get("name"), Some("Ann"));
//! ```

use std::sync::{Mutex, PoisonError};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    FetchError, FieldDescriptor, FormSchema, FormTransport, SubmissionError, SubmissionPayload,
};

/// A transport that answers from memory.
#[derive(Debug)]
pub struct TestTransport {
    questions: Vec<FieldDescriptor>,
    fetch_status: u16,
    submit_status: u16,
    fetches: AtomicUsize,
    submissions: Mutex<Vec<SubmissionPayload>>,
}

impl Default for TestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTransport {
    /// Create a transport serving an empty schema and accepting every submission.
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            fetch_status: 200,
            submit_status: 200,
            fetches: AtomicUsize::new(0),
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Serve these descriptors.
    pub fn with_questions(mut self, questions: Vec<FieldDescriptor>) -> Self {
        self.questions = questions;
        self
    }

    /// Serve this schema.
    pub fn with_schema(self, schema: FormSchema) -> Self {
        self.with_questions(schema.into_fields())
    }

    /// Answer fetches with this HTTP status.
    pub fn with_fetch_status(mut self, status: u16) -> Self {
        self.fetch_status = status;
        self
    }

    /// Answer submissions with this HTTP status.
    pub fn with_submit_status(mut self, status: u16) -> Self {
        self.submit_status = status;
        self
    }

    /// Number of schema fetches so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Every payload submitted so far, in order.
    pub fn submissions(&self) -> Vec<SubmissionPayload> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

#[async_trait]
impl FormTransport for TestTransport {
    async fn fetch_questions(&self) -> Result<Vec<FieldDescriptor>, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if !is_success(self.fetch_status) {
            let status_text = StatusCode::from_u16(self.fetch_status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or_default()
                .to_string();
            return Err(FetchError::Status {
                status: self.fetch_status,
                status_text,
            });
        }
        Ok(self.questions.clone())
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload.clone());
        if !is_success(self.submit_status) {
            return Err(SubmissionError::Status(self.submit_status));
        }
        Ok(())
    }
}
