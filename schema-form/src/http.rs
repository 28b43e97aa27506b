//! HTTP transport backed by `reqwest`.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::config::{ConfigError, FormConfig};
use crate::{FetchError, FieldDescriptor, FormTransport, SubmissionError, SubmissionPayload};

/// Talks to the form service over HTTP.
///
/// `GET {base}/questions` returns the schema; `POST {base}/submitform` takes
/// the JSON payload. Every request is bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    questions_url: Url,
    submit_url: Url,
}

impl HttpTransport {
    pub fn new(config: &FormConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("schema-form/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            questions_url: config.questions_url()?,
            submit_url: config.submit_url()?,
        })
    }

    pub fn questions_url(&self) -> &Url {
        &self.questions_url
    }

    pub fn submit_url(&self) -> &Url {
        &self.submit_url
    }
}

#[async_trait]
impl FormTransport for HttpTransport {
    async fn fetch_questions(&self) -> Result<Vec<FieldDescriptor>, FetchError> {
        debug!(url = %self.questions_url, "Fetching questions");
        let response = self
            .client
            .get(self.questions_url.clone())
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        response
            .json::<Vec<FieldDescriptor>>()
            .await
            .map_err(FetchError::decode)
    }

    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmissionError> {
        let body = payload.to_json()?;
        debug!(url = %self.submit_url, "Posting submission");
        let response = self
            .client
            .post(self.submit_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(SubmissionError::network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubmissionError::Status(status.as_u16()));
        }
        Ok(())
    }
}
