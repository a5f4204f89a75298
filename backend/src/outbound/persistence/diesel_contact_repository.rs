//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ContactRepository, ContactRepositoryError};
use crate::domain::{Contact, ContactId, ContactName, ContactType, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ContactRow, ContactUpdate, NewContactRow};
use super::pool::DbPool;
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
}

impl DieselContactRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Rows written by this adapter always satisfy the domain invariants; a row
/// that does not was edited out of band and is reported as a query failure.
fn row_to_contact(row: ContactRow) -> Result<Contact, ContactRepositoryError> {
    let name = ContactName::new(&row.name).map_err(|err| {
        ContactRepositoryError::query(format!("stored contact {} is invalid: {err}", row.id))
    })?;
    let contact_type = row.contact_type.parse::<ContactType>().map_err(|err| {
        ContactRepositoryError::query(format!("stored contact {} is invalid: {err}", row.id))
    })?;
    Ok(Contact {
        id: ContactId::from_uuid(row.id),
        owner: UserId::from_uuid(row.user_id),
        name,
        email: row.email,
        phone: row.phone,
        contact_type,
        created_at: row.created_at,
    })
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn list_for_owner(&self, owner: &UserId) -> Result<Vec<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<ContactRow> = contacts::table
            .filter(contacts::user_id.eq(owner.as_uuid()))
            .order((contacts::created_at.desc(), contacts::id.desc()))
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_contact).collect()
    }

    async fn find_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .find(id.as_uuid())
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_contact).transpose()
    }

    async fn insert(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewContactRow {
            id: *contact.id.as_uuid(),
            user_id: *contact.owner.as_uuid(),
            name: contact.name.as_ref(),
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
            contact_type: contact.contact_type.as_str(),
            created_at: contact.created_at,
        };
        diesel::insert_into(contacts::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn update(&self, contact: &Contact) -> Result<bool, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changes = ContactUpdate {
            name: contact.name.as_ref(),
            email: contact.email.as_deref(),
            phone: contact.phone.as_deref(),
            contact_type: contact.contact_type.as_str(),
        };
        let updated = diesel::update(contacts::table.find(contact.id.as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(updated > 0)
    }

    async fn delete(&self, id: &ContactId) -> Result<bool, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(contacts::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; query behaviour needs a live database.
    use super::*;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn row() -> ContactRow {
        ContactRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: "Ann".to_owned(),
            email: Some("ann@example.com".to_owned()),
            phone: None,
            contact_type: "professional".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn valid_rows_convert(row: ContactRow) {
        let expected_id = row.id;
        let contact = row_to_contact(row).expect("valid row");

        assert_eq!(contact.id.as_uuid(), &expected_id);
        assert_eq!(contact.contact_type, ContactType::Professional);
        assert_eq!(contact.email.as_deref(), Some("ann@example.com"));
    }

    #[rstest]
    fn blank_stored_name_is_a_query_error(mut row: ContactRow) {
        row.name = "  ".to_owned();
        let err = row_to_contact(row).expect_err("invalid row");
        assert!(matches!(err, ContactRepositoryError::Query { .. }));
    }

    #[rstest]
    fn unknown_stored_type_is_a_query_error(mut row: ContactRow) {
        row.contact_type = "family".to_owned();
        let err = row_to_contact(row).expect_err("invalid row");
        assert!(matches!(err, ContactRepositoryError::Query { .. }));
    }
}
