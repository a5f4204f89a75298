//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod contacts;
mod contacts_dto;
pub mod error;
pub mod health;
pub mod session;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every `/api/v1` handler on `cfg`.
///
/// Callers mount the result under the versioned scope and supply
/// [`state::HttpState`] plus session middleware.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(users::login)
        .service(users::logout)
        .service(contacts::list_contacts)
        .service(contacts::create_contact)
        .service(contacts::update_contact)
        .service(contacts::delete_contact);
}
