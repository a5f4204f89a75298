//! Driving port for contact mutations.
//!
//! Inbound adapters call this port with the authenticated caller's id; the
//! implementation owns validation of existence and ownership.

use async_trait::async_trait;

use crate::domain::{Contact, ContactId, ContactPatch, Error, NewContact, UserId};

/// Confirmation returned after a contact is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactRemoved {
    /// Identifier of the removed contact.
    pub id: ContactId,
}

/// Domain use-case port for creating, updating and deleting contacts.
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Store a new contact owned by `caller` and return it.
    async fn create_contact(&self, caller: &UserId, input: NewContact) -> Result<Contact, Error>;

    /// Apply `patch` to a contact owned by `caller` and return the result.
    ///
    /// Fails with `NotFound` when the id is unknown and `Unauthorized` when
    /// the contact belongs to someone else.
    async fn update_contact(
        &self,
        caller: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, Error>;

    /// Remove a contact owned by `caller`.
    ///
    /// Same failure modes as [`ContactsCommand::update_contact`].
    async fn delete_contact(&self, caller: &UserId, id: &ContactId)
    -> Result<ContactRemoved, Error>;
}
