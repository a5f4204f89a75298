//! Process-local `ContactRepository` used when no database is configured.
//!
//! State lives in a `HashMap` behind a Tokio mutex that is held for a single
//! operation at a time. Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactId, UserId};

/// In-memory contact store.
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
    contacts: Mutex<HashMap<ContactId, Contact>>,
}

impl InMemoryContactRepository {
    /// Number of stored contacts across all owners.
    pub async fn len(&self) -> usize {
        self.contacts.lock().await.len()
    }

    /// Whether the store holds no contacts.
    pub async fn is_empty(&self) -> bool {
        self.contacts.lock().await.is_empty()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut owned: Vec<Contact> = self
            .contacts
            .lock()
            .await
            .values()
            .filter(|contact| contact.is_owned_by(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(owned)
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        Ok(self.contacts.lock().await.get(id).cloned())
    }

    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let mut contacts = self.contacts.lock().await;
        if contacts.contains_key(&contact.id) {
            return Err(ContactRepositoryError::query(format!(
                "contact {} already exists",
                contact.id
            )));
        }
        contacts.insert(contact.id, contact.clone());
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<bool, ContactRepositoryError> {
        let mut contacts = self.contacts.lock().await;
        match contacts.get_mut(&contact.id) {
            Some(stored) => {
                *stored = contact.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactRepositoryError> {
        Ok(self.contacts.lock().await.remove(id).is_some())
    }
}
