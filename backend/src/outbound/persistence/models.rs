//! Internal Diesel row structs for the contacts table.
//!
//! These never leave the persistence layer; the repository converts them
//! into domain [`Contact`](crate::domain::Contact) values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::contacts;

/// Row read from `contacts`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = contacts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ContactRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_type: String,
    pub created_at: DateTime<Utc>,
}

/// Insertable contact.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = contacts)]
pub(crate) struct NewContactRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub contact_type: &'a str,
    pub created_at: DateTime<Utc>,
}

/// Changeset for the mutable columns.
///
/// `treat_none_as_null` so a cleared email or phone is written as `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = contacts)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ContactUpdate<'a> {
    pub name: &'a str,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub contact_type: &'a str,
}
