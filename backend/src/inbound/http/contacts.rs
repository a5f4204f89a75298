//! Contact API handlers.
//!
//! ```text
//! GET    /api/v1/contacts
//! POST   /api/v1/contacts        {"name":"Ann","type":"personal"}
//! PUT    /api/v1/contacts/{id}   {"phone":"555"}
//! DELETE /api/v1/contacts/{id}
//! ```
//!
//! Every handler resolves the caller from the session before touching the
//! store; ownership is enforced by the domain service.

use actix_web::{delete, get, post, put, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{MessageBody, ValidationBody};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_contact_id;

pub use super::contacts_dto::{ContactRequest, ContactResponse, RemovedResponse};
use super::contacts_dto::{CONTACT_REMOVED, parse_contact_patch, parse_new_contact};

/// List the caller's contacts, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    responses(
        (status = 200, description = "Caller's contacts", body = [ContactResponse]),
        (status = 401, description = "No session", body = MessageBody),
        (status = 500, description = "Server Error!", body = String, content_type = "text/plain")
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ContactResponse>>> {
    let user_id = session.require_user_id()?;
    let contacts = state.contacts_query.list_contacts(&user_id).await?;
    Ok(web::Json(
        contacts.into_iter().map(ContactResponse::from).collect(),
    ))
}

/// Create a contact owned by the caller.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Stored contact", body = ContactResponse),
        (status = 400, description = "Invalid request", body = ValidationBody),
        (status = 401, description = "No session", body = MessageBody),
        (status = 500, description = "Server Error!", body = String, content_type = "text/plain")
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let user_id = session.require_user_id()?;
    let input = parse_new_contact(payload.into_inner())?;
    let contact = state.contacts.create_contact(&user_id, input).await?;
    Ok(web::Json(ContactResponse::from(contact)))
}

/// Overwrite the supplied fields of a contact owned by the caller.
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    request_body = ContactRequest,
    params(
        ("id" = String, Path, description = "Contact identifier")
    ),
    responses(
        (status = 200, description = "Updated contact", body = ContactResponse),
        (status = 400, description = "Invalid request", body = ValidationBody),
        (status = 401, description = "No session or not the owner", body = MessageBody),
        (status = 404, description = "Contact not found!", body = MessageBody),
        (status = 500, description = "Server Error!", body = String, content_type = "text/plain")
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ContactRequest>,
) -> ApiResult<web::Json<ContactResponse>> {
    let user_id = session.require_user_id()?;
    let id = parse_contact_id(&path.into_inner())?;
    let patch = parse_contact_patch(payload.into_inner())?;
    let contact = state.contacts.update_contact(&user_id, &id, patch).await?;
    Ok(web::Json(ContactResponse::from(contact)))
}

/// Delete a contact owned by the caller.
#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    params(
        ("id" = String, Path, description = "Contact identifier")
    ),
    responses(
        (status = 200, description = "Contact Removed!", body = RemovedResponse),
        (status = 401, description = "No session or not the owner", body = MessageBody),
        (status = 404, description = "Contact not found!", body = MessageBody),
        (status = 500, description = "Server Error!", body = String, content_type = "text/plain")
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<RemovedResponse>> {
    let user_id = session.require_user_id()?;
    let id = parse_contact_id(&path.into_inner())?;
    state.contacts.delete_contact(&user_id, &id).await?;
    Ok(web::Json(RemovedResponse {
        msg: CONTACT_REMOVED.to_owned(),
    }))
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
