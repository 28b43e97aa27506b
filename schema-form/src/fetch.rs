//! Schema fetching.

use tracing::{debug, error};

use crate::page::FormPage;
use crate::{FieldDescriptor, FormTransport, LOAD_ERROR_MESSAGE, StatusStyle};

impl<T: FormTransport> FormPage<T> {
    /// Fetch the field descriptors.
    ///
    /// Never fails: any error is logged, reported in the status area, and
    /// turned into an empty sequence.
    pub async fn fetch_questions(&mut self) -> Vec<FieldDescriptor> {
        match self.transport.fetch_questions().await {
            Ok(questions) => {
                debug!(count = questions.len(), "Fetched form questions");
                questions
            }
            Err(err) => {
                error!(error = %err, "Error fetching questions");
                self.set_status(LOAD_ERROR_MESSAGE, StatusStyle::Error);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TestTransport;

    #[tokio::test]
    async fn failure_yields_empty_sequence_and_error_status() {
        let mut page = FormPage::new(TestTransport::new().with_fetch_status(503));

        let questions = page.fetch_questions().await;

        assert!(questions.is_empty());
        assert_eq!(page.status().text, LOAD_ERROR_MESSAGE);
        assert!(page.status().is_error());
    }

    #[tokio::test]
    async fn success_returns_descriptors_untouched() {
        let fields = vec![FieldDescriptor::input("name", "text", "Name")];
        let mut page = FormPage::new(TestTransport::new().with_questions(fields.clone()));

        assert_eq!(page.fetch_questions().await, fields);
        assert!(page.status().is_empty());
    }
}
