/// Retrieving the schema failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch questions: {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response (connection, timeout, ...).
    #[error("Failed to fetch questions: {0}")]
    Network(#[source] anyhow::Error),

    /// The response body was not a JSON array of field descriptors.
    #[error("Failed to decode questions: {0}")]
    Decode(#[source] anyhow::Error),
}

impl FetchError {
    pub fn network(err: impl Into<anyhow::Error>) -> Self {
        Self::Network(err.into())
    }

    pub fn decode(err: impl Into<anyhow::Error>) -> Self {
        Self::Decode(err.into())
    }
}

/// Posting the payload failed.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The server answered with a non-success status.
    #[error("Submission failed: {0}")]
    Status(u16),

    /// The request never produced a response.
    #[error("Submission failed: {0}")]
    Network(#[source] anyhow::Error),

    /// The payload could not be serialized.
    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

impl SubmissionError {
    pub fn network(err: impl Into<anyhow::Error>) -> Self {
        Self::Network(err.into())
    }

    /// The HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

/// A descriptor did not have the shape the renderer relies on.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Radio field '{name}' has no options")]
    MissingOptions { name: String },
}

/// The schema breaks one of its invariants.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Duplicate id in schema: {0}")]
    DuplicateId(String),
}
