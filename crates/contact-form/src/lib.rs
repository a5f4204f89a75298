//! Contact create/edit form.
//!
//! [`ContactForm`] holds the draft being edited and the record currently
//! selected for editing. Submitting dispatches exactly one action through a
//! [`ContactActions`] implementation; [`HttpContactActions`] sends it to the
//! contacts backend.

mod actions;
mod client;
mod draft;
mod form;

pub use actions::{ActionError, ContactActions};
pub use client::HttpContactActions;
pub use draft::{ContactRecord, ContactType, Draft, DraftError, Field};
pub use form::{ContactForm, Submitted};
