//! Sample form schemas for tests and demos.

pub mod broken;
pub mod contact;
pub mod event_registration;
pub mod newsletter;
pub mod single_name;

pub use broken::{radio_without_options, with_duplicate_ids};
pub use contact::{CONTACT_JSON, contact};
pub use event_registration::event_registration;
pub use newsletter::newsletter;
pub use single_name::single_name;
