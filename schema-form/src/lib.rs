//! # schema-form
//!
//! Render forms from a fetched schema, validate them, and submit the answers
//! as JSON.
//!
//! A [`FormPage`] owns everything one form needs: a DOM-like UI tree, the
//! status area, the listener table, and a [`FormTransport`] to talk to the
//! form service. Nothing is global, so pages can coexist.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schema_form::{FormConfig, FormPage, HttpTransport, SubmitOutcome};
//!
//! let transport = HttpTransport::new(&FormConfig::default())?;
//! let mut page = FormPage::new(transport);
//!
//! // GET /questions, then build one wrapper per field descriptor
//! page.render_form().await?;
//!
//! // Drive it like a user would
//! page.type_text("name", "Ann")?;
//! page.blur("name")?;
//!
//! // Validate everything and POST /submitform
//! match page.submit().await {
//!     SubmitOutcome::Submitted(payload) => println!("sent {payload:?}"),
//!     _ => println!("{}", page.status().text),
//! }
//! ```
//!
//! ## Events
//!
//! Every rendered input listens for:
//! - `input` - keeps a custom validity message in step with the value
//! - `invalid` - shows an accessible inline alert next to the control
//! - `blur` - validates the control and reports to the status area
//!
//! The form itself listens for `submit`.
//!
//! ## Transports
//!
//! - [`HttpTransport`] - `reqwest` against the configured endpoints
//! - [`TestTransport`] - canned answers, records submissions

// Re-export all types from schema-form-types
pub use schema_form_types::*;

pub mod dom;
pub use dom::{Document, NodeId};

pub mod events;
pub use events::{DispatchTable, EventKind, Listener};

mod page;
pub use page::{CONTAINER_ID, FORM_ID, FormPage, PageError, STATUS_ID};

mod fetch;
mod render;

mod validation;
pub use validation::EMAIL_EXPECTED_MESSAGE;

mod submit;
pub use submit::SubmitOutcome;

mod html;
pub use html::{HtmlOptions, escape_html};

mod config;
pub use config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, FormConfig};

mod http;
pub use http::HttpTransport;

// Test transport for driving pages without a network
mod test_transport;
pub use test_transport::TestTransport;
