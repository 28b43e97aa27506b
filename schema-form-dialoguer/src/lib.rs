//! # schema-form-dialoguer
//!
//! Terminal front end for schema-form.
//!
//! Fills a rendered [`FormPage`](schema_form::FormPage) field by field with
//! `dialoguer` prompts. Every answer goes through the page's own event
//! handlers, so the terminal sees the same validation messages a browser
//! user would.
//!
//! ## Example
//!
//! ```rust,ignore
//! use schema_form::{FormConfig, FormPage, HttpTransport};
//! use schema_form_dialoguer::DialoguerFiller;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let mut page = FormPage::new(HttpTransport::new(&FormConfig::default())?);
//!     page.render_form().await?;
//!
//!     DialoguerFiller::new().fill(&mut page)?;
//!     let outcome = page.submit().await;
//!     println!("{}", page.status().text);
//!     Ok(())
//! }
//! ```

mod filler;

pub use filler::{DialoguerFiller, FillError};
