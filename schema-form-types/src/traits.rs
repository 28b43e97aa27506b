use std::sync::Arc;

use async_trait::async_trait;

use crate::{FetchError, FieldDescriptor, SubmissionError, SubmissionPayload};

/// The network seam of a form page.
///
/// One implementation talks HTTP; tests use an in-memory one. Neither retries:
/// every failure is terminal for that attempt.
#[async_trait]
pub trait FormTransport: Send + Sync {
    /// Retrieve the field descriptors, in rendering order.
    async fn fetch_questions(&self) -> Result<Vec<FieldDescriptor>, FetchError>;

    /// Send the collected values.
    ///
    /// Only the response status matters; the body is not consumed.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError>;
}

#[async_trait]
impl<T: FormTransport + ?Sized> FormTransport for Arc<T> {
    async fn fetch_questions(&self) -> Result<Vec<FieldDescriptor>, FetchError> {
        (**self).fetch_questions().await
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        (**self).submit(payload).await
    }
}
