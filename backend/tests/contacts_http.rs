//! End-to-end coverage of the contacts REST surface over the in-memory store.
//!
//! The app is assembled from public building blocks the same way the server
//! binary does, minus the listener.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use contacts_backend::Trace;
use contacts_backend::domain::ports::FixtureLoginService;
use contacts_backend::domain::{ContactsService, TRACE_ID_HEADER};
use contacts_backend::inbound::http::configure_api;
use contacts_backend::inbound::http::state::HttpState;
use contacts_backend::inbound::http::validation::json_config;
use contacts_backend::outbound::memory::InMemoryContactRepository;
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::{Value, json};

fn state() -> HttpState {
    let service = Arc::new(ContactsService::new(
        Arc::new(InMemoryContactRepository::default()),
        Arc::new(DefaultClock),
    ));
    HttpState::new(Arc::new(FixtureLoginService), service.clone(), service)
}

async fn init_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build();
    test::init_service(
        App::new()
            .app_data(web::Data::new(state()))
            .app_data(json_config())
            .wrap(Trace)
            .service(web::scope("/api/v1").wrap(session).configure(configure_api)),
    )
    .await
}

async fn login<S>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": username, "password": "password" }))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned()
}

async fn send<S>(app: &S, req: test::TestRequest, cookie: &Cookie<'static>) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.cookie(cookie.clone()).to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn create<S>(app: &S, cookie: &Cookie<'static>, payload: Value) -> Value
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(payload),
        cookie,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}

#[actix_web::test]
async fn created_contact_is_returned_with_owner_and_defaults() {
    let app = init_app().await;
    let ann = login(&app, "ann").await;

    let body = create(&app, &ann, json!({ "name": "Jill", "email": "jill@example.com" })).await;

    assert_eq!(body["name"], "Jill");
    assert_eq!(body["email"], "jill@example.com");
    assert_eq!(body["type"], "personal");
    assert_eq!(body["user"], "123e4567-e89b-12d3-a456-426614174000");
    assert!(body.get("phone").is_none());
    assert!(body["date"].as_str().is_some_and(|date| !date.is_empty()));
}

#[actix_web::test]
async fn partial_update_keeps_untouched_fields() {
    let app = init_app().await;
    let ann = login(&app, "ann").await;
    let created = create(
        &app,
        &ann,
        json!({ "name": "Jill", "email": "jill@example.com", "type": "professional" }),
    )
    .await;
    let id = created["id"].as_str().expect("id");

    let (status, body) = send(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/v1/contacts/{id}"))
            .set_json(json!({ "phone": "555-0100" })),
        &ann,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jill");
    assert_eq!(body["email"], "jill@example.com");
    assert_eq!(body["phone"], "555-0100");
    assert_eq!(body["type"], "professional");
    assert_eq!(body["date"], created["date"]);
}

#[actix_web::test]
async fn list_is_scoped_to_the_caller_and_newest_first() {
    let app = init_app().await;
    let ann = login(&app, "ann").await;
    let bob = login(&app, "bob").await;
    create(&app, &ann, json!({ "name": "First" })).await;
    create(&app, &bob, json!({ "name": "Bob's friend" })).await;
    create(&app, &ann, json!({ "name": "Second" })).await;

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri("/api/v1/contacts"),
        &ann,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|contact| contact["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[rstest]
#[case("PUT")]
#[case("DELETE")]
#[actix_web::test]
async fn another_users_contact_cannot_be_changed(#[case] method: &str) {
    let app = init_app().await;
    let ann = login(&app, "ann").await;
    let bob = login(&app, "bob").await;
    let created = create(&app, &ann, json!({ "name": "Jill" })).await;
    let uri = format!("/api/v1/contacts/{}", created["id"].as_str().expect("id"));

    let req = match method {
        "PUT" => test::TestRequest::put()
            .uri(&uri)
            .set_json(json!({ "name": "Hijacked" })),
        _ => test::TestRequest::delete().uri(&uri),
    };
    let (status, body) = send(&app, req, &bob).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["msg"], "Not an Authorized user!");

    let (_, listed) = send(&app, test::TestRequest::get().uri("/api/v1/contacts"), &ann).await;
    assert_eq!(listed[0]["name"], "Jill");
}

#[actix_web::test]
async fn delete_confirms_then_reports_missing() {
    let app = init_app().await;
    let ann = login(&app, "ann").await;
    let created = create(&app, &ann, json!({ "name": "Jill" })).await;
    let uri = format!("/api/v1/contacts/{}", created["id"].as_str().expect("id"));

    let (status, body) = send(&app, test::TestRequest::delete().uri(&uri), &ann).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Contact Removed!");

    let (status, body) = send(&app, test::TestRequest::delete().uri(&uri), &ann).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Contact not found!");
}

#[actix_web::test]
async fn missing_name_reports_field_error() {
    let app = init_app().await;
    let ann = login(&app, "ann").await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/v1/contacts")
            .set_json(json!({ "email": "nobody@example.com" })),
        &ann,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["param"], "name");
    assert_eq!(body["errors"][0]["location"], "body");
}

#[actix_web::test]
async fn unauthenticated_request_carries_trace_id() {
    let app = init_app().await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v1/contacts").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["msg"], "No session, authorization denied");
}
