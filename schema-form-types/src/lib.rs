//! Core types for the schema-form crate.
//!
//! This crate provides the foundational, presentation-agnostic types:
//! - `FieldDescriptor` and `FormSchema` - The fetched form layout
//! - `ControlConstraints` and `ValidityState` - Declarative constraint validation
//! - `SubmissionPayload` and `StatusMessage` - What gets sent and what gets shown
//! - `FormTransport` trait - The network seam for fetching and submitting

mod descriptor;
pub use descriptor::{FieldDescriptor, InputType, RadioOption};

mod schema;
pub use schema::FormSchema;

mod constraint;
pub use constraint::{
    ControlConstraints, EMAIL_MISMATCH_MESSAGE, PATTERN_MISMATCH_MESSAGE,
    RADIO_VALUE_MISSING_MESSAGE, URL_MISMATCH_MESSAGE, VALUE_MISSING_MESSAGE, ValidityState,
    is_valid_email,
};

mod payload;
pub use payload::SubmissionPayload;

mod status;
pub use status::{
    CORRECT_ERRORS_MESSAGE, LOAD_ERROR_MESSAGE, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
    StatusMessage, StatusStyle,
};

mod error;
pub use error::{FetchError, RenderError, SchemaError, SubmissionError};

mod traits;
pub use traits::FormTransport;
