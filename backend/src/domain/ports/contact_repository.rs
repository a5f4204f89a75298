//! Driven port for contact persistence.
//!
//! The [`ContactRepository`] trait is implemented by outbound adapters
//! (PostgreSQL, in-memory). It knows nothing about ownership rules; the
//! domain service enforces those before calling mutating methods.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
    }
}

/// Port for contact storage and retrieval.
///
/// Every method is a single independent operation; adapters are not expected
/// to coordinate across calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Fetch every contact owned by `owner`, newest first.
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Contact>, ContactRepositoryError>;

    /// Fetch a contact by id regardless of owner.
    ///
    /// Returns `None` if no contact exists with the given id.
    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Persist a new contact.
    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError>;

    /// Overwrite a stored contact with the supplied state.
    ///
    /// Returns `Ok(false)` if the contact no longer exists.
    async fn update(&self, contact: &Contact) -> Result<bool, ContactRepositoryError>;

    /// Delete a contact by id.
    ///
    /// Returns `Ok(true)` if the contact was deleted, `Ok(false)` if it did
    /// not exist.
    async fn delete(&self, id: &ContactId) -> Result<bool, ContactRepositoryError>;
}
