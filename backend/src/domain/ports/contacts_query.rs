//! Driving port for contact reads.

use async_trait::async_trait;

use crate::domain::{Contact, Error, UserId};

/// Domain use-case port for listing the caller's contacts.
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return every contact owned by `caller`, newest first.
    async fn list_contacts(&self, caller: &UserId) -> Result<Vec<Contact>, Error>;
}
