//! Session login and logout handlers.
//!
//! ```text
//! POST /api/v1/login {"username":"ann","password":"password"}
//! POST /api/v1/logout
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{LoginCredentials, LoginValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{MessageBody, ValidationBody};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::login_validation_error;

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = ValidationBody),
        (status = 401, description = "Invalid credentials", body = MessageBody),
        (status = 500, description = "Server Error!", body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = LoginCredentials::try_from(payload.into_inner())
        .map_err(|err| login_validation_error(&err))?;
    let user_id = state.login.authenticate(&credentials).await?;
    session.persist_user(&user_id)?;
    tracing::info!(user_id = %user_id, "session established");
    Ok(HttpResponse::Ok().finish())
}

/// Drop the caller's session.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Session cleared")
    ),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::session::NO_SESSION;
    use crate::inbound::http::test_utils::{api_test_app, contacts_test_state, login_cookie};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case("   ", "password", "username")]
    #[case("ann", "", "password")]
    #[actix_web::test]
    async fn login_rejects_blank_fields(
        #[case] username: &str,
        #[case] password: &str,
        #[case] param: &str,
    ) {
        let app = actix_test::init_service(api_test_app(contacts_test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                username: username.into(),
                password: password.into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.pointer("/errors/0/param").and_then(Value::as_str),
            Some(param)
        );
    }

    #[actix_web::test]
    async fn login_rejects_wrong_password() {
        let app = actix_test::init_service(api_test_app(contacts_test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(&LoginRequest {
                username: "ann".into(),
                password: "wrong-password".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("msg").and_then(Value::as_str),
            Some("Invalid credentials")
        );
    }

    #[actix_web::test]
    async fn logout_drops_the_session() {
        let app = actix_test::init_service(api_test_app(contacts_test_state())).await;
        let cookie = login_cookie(&app, "ann").await;

        let logged_out = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(logged_out.status(), StatusCode::OK);
        let cleared = logged_out
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("removal cookie")
            .into_owned();

        let list = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/contacts")
                .cookie(cleared)
                .to_request(),
        )
        .await;
        assert_eq!(list.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(list).await;
        assert_eq!(value.get("msg").and_then(Value::as_str), Some(NO_SESSION));
    }
}
