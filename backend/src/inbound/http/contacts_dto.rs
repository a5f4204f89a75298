//! Contact DTOs and parsing helpers.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Contact, ContactPatch, Error, NewContact};
use crate::inbound::http::validation::contact_validation_error;

/// Request payload for creating or updating a contact.
///
/// Creation requires `name`; updates accept any subset of fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequest {
    /// Display name; required on create.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// `personal` (default) or `professional`.
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
}

/// Response payload for a stored contact.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactResponse {
    /// Contact id.
    pub id: String,
    /// Owning user id.
    pub user: String,
    /// Display name.
    pub name: String,
    /// Email address, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// `personal` or `professional`.
    #[serde(rename = "type")]
    pub contact_type: String,
    /// RFC 3339 creation timestamp.
    pub date: String,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            user: contact.owner.to_string(),
            name: contact.name.to_string(),
            email: contact.email,
            phone: contact.phone,
            contact_type: contact.contact_type.as_str().to_owned(),
            date: contact.created_at.to_rfc3339(),
        }
    }
}

/// Confirmation body for `DELETE /contacts/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RemovedResponse {
    /// Always `Contact Removed!`.
    pub msg: String,
}

pub(super) const CONTACT_REMOVED: &str = "Contact Removed!";

pub(super) fn parse_new_contact(payload: ContactRequest) -> Result<NewContact, Error> {
    let ContactRequest {
        name,
        email,
        phone,
        contact_type,
    } = payload;
    NewContact::try_from_parts(name, email, phone, contact_type)
        .map_err(|errors| contact_validation_error(&errors))
}

pub(super) fn parse_contact_patch(payload: ContactRequest) -> Result<ContactPatch, Error> {
    let ContactRequest {
        name,
        email,
        phone,
        contact_type,
    } = payload;
    ContactPatch::try_from_parts(name, email, phone, contact_type)
        .map_err(|errors| contact_validation_error(&errors))
}
