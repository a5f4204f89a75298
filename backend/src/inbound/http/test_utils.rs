//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use mockable::DefaultClock;
use serde_json::json;

use crate::domain::ContactsService;
use crate::domain::ports::FixtureLoginService;
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::json_config;
use crate::outbound::memory::InMemoryContactRepository;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// HTTP state over an empty in-memory store and the fixture accounts.
pub fn contacts_test_state() -> HttpState {
    let service = Arc::new(ContactsService::new(
        Arc::new(InMemoryContactRepository::default()),
        Arc::new(DefaultClock),
    ));
    HttpState::new(Arc::new(FixtureLoginService), service.clone(), service)
}

/// Full `/api/v1` surface over `state`.
pub fn api_test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .wrap(test_session_middleware())
        .service(web::scope("/api/v1").configure(configure_api))
}

/// Log in as a fixture account and return the session cookie.
pub async fn login_cookie<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "username": username, "password": "password" }))
        .to_request();
    let response = test::call_service(app, request).await;
    assert_eq!(response.status(), StatusCode::OK, "login as {username}");
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}
