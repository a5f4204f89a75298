//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact, session and health endpoints together
//! with their request and response bodies. Swagger UI serves it in debug
//! builds.

use crate::inbound::http::contacts::{ContactRequest, ContactResponse, RemovedResponse};
use crate::inbound::http::error::{MessageBody, ValidationBody};
use crate::inbound::http::users::LoginRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Contacts backend API",
        description = "Per-user contact storage behind a session cookie.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactRequest,
        ContactResponse,
        RemovedResponse,
        LoginRequest,
        MessageBody,
        ValidationBody,
    )),
    tags(
        (name = "contacts", description = "Contact storage for the signed-in user"),
        (name = "users", description = "Session management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
