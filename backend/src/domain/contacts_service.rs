//! Contact store use-cases.
//!
//! [`ContactsService`] implements both driving ports over any
//! [`ContactRepository`]. Every mutating operation goes through
//! [`ContactsService::load_owned`], which loads the record and refuses callers
//! who do not own it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use mockable::Clock;
use tracing::{error, warn};

use crate::domain::ports::{
    ContactRemoved, ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
};
use crate::domain::{Contact, ContactId, ContactPatch, Error, NewContact, UserId};

/// Message returned when a contact id is unknown.
pub const CONTACT_NOT_FOUND: &str = "Contact not found!";
/// Message returned when the caller does not own the contact.
pub const NOT_AUTHORIZED: &str = "Not an Authorized user!";

/// Domain service for the contact store.
pub struct ContactsService<R: ?Sized> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R: ?Sized> Clone for ContactsService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: ?Sized> ContactsService<R> {
    /// Create a service over `repo`, stamping new contacts with `clock`.
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(err: ContactRepositoryError) -> Error {
    error!(error = %err, "contact repository failure");
    Error::internal(err.to_string())
}

fn newest_first(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

impl<R> ContactsService<R>
where
    R: ContactRepository + ?Sized,
{
    /// Load `id` and check that `caller` owns it.
    ///
    /// # Errors
    /// `NotFound` when the contact does not exist, `Unauthorized` when it is
    /// owned by another user, `InternalError` on repository failure.
    pub async fn load_owned(&self, caller: &UserId, id: &ContactId) -> Result<Contact, Error> {
        let contact = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(CONTACT_NOT_FOUND))?;

        if !contact.is_owned_by(caller) {
            warn!(contact_id = %id, caller = %caller, "contact access refused");
            return Err(Error::unauthorized(NOT_AUTHORIZED));
        }
        Ok(contact)
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactsService<R>
where
    R: ContactRepository + ?Sized,
{
    async fn list_contacts(&self, caller: &UserId) -> Result<Vec<Contact>, Error> {
        let mut contacts = self
            .repo
            .list_for_owner(caller)
            .await
            .map_err(map_repository_error)?;
        contacts.retain(|contact| contact.is_owned_by(caller));
        newest_first(&mut contacts);
        Ok(contacts)
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactsService<R>
where
    R: ContactRepository + ?Sized,
{
    async fn create_contact(&self, caller: &UserId, input: NewContact) -> Result<Contact, Error> {
        // PostgreSQL keeps microseconds; stamp what will be read back.
        let created_at = self.clock.utc().trunc_subsecs(6);
        let contact = Contact::create(caller.clone(), input, created_at);
        self.repo
            .insert(&contact)
            .await
            .map_err(map_repository_error)?;
        Ok(contact)
    }

    async fn update_contact(
        &self,
        caller: &UserId,
        id: &ContactId,
        patch: ContactPatch,
    ) -> Result<Contact, Error> {
        let mut contact = self.load_owned(caller, id).await?;
        if patch.is_empty() {
            return Ok(contact);
        }
        contact.apply(patch);

        let updated = self
            .repo
            .update(&contact)
            .await
            .map_err(map_repository_error)?;
        if !updated {
            return Err(Error::not_found(CONTACT_NOT_FOUND));
        }
        Ok(contact)
    }

    async fn delete_contact(
        &self,
        caller: &UserId,
        id: &ContactId,
    ) -> Result<ContactRemoved, Error> {
        self.load_owned(caller, id).await?;
        let deleted = self.repo.delete(id).await.map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::not_found(CONTACT_NOT_FOUND));
        }
        Ok(ContactRemoved { id: *id })
    }
}
