//! Reqwest-backed [`ContactActions`] talking to the contacts backend.
//!
//! This adapter owns transport details only: the session cookie, request
//! serialisation, and mapping of the backend's error bodies.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{COOKIE, HeaderMap, SET_COOKIE};
use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::actions::{ActionError, ContactActions};
use crate::draft::{ContactRecord, Draft};

const SESSION_COOKIE_NAME: &str = "session";

#[derive(Deserialize)]
struct MessageBody {
    msg: String,
}

#[derive(Deserialize)]
struct ValidationBody {
    errors: Vec<MessageBody>,
}

/// HTTP client for the `/api/v1` contact endpoints.
pub struct HttpContactActions {
    client: Client,
    base: Url,
    session_cookie: Option<String>,
}

impl HttpContactActions {
    /// Build a client rooted at `base` (for example `http://host/api/v1`).
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: with_trailing_slash(base),
            session_cookie: None,
        })
    }

    /// Reuse an existing `session=...` cookie pair.
    #[must_use]
    pub fn with_session_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.session_cookie = Some(cookie.into());
        self
    }

    /// Current `session=...` cookie pair, if signed in.
    pub fn session_cookie(&self) -> Option<&str> {
        self.session_cookie.as_deref()
    }

    /// Sign in and keep the issued session cookie for later actions.
    ///
    /// # Errors
    /// [`ActionError::Invalid`] for blank credentials,
    /// [`ActionError::Refused`] for wrong ones, and
    /// [`ActionError::Decode`] when the response carries no session cookie.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), ActionError> {
        let response = self
            .client
            .post(self.endpoint("login")?)
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let cookie = session_cookie_from(response.headers());
        if !status.is_success() {
            let body = response.bytes().await.map_err(map_transport_error)?;
            return Err(map_status_error(status, &body));
        }
        let cookie =
            cookie.ok_or_else(|| ActionError::decode("login response set no session cookie"))?;
        self.session_cookie = Some(cookie);
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ActionError> {
        self.base
            .join(path)
            .map_err(|err| ActionError::transport(format!("invalid endpoint {path}: {err}")))
    }

    /// `contacts/<id>` with `id` pushed as one percent-encoded path segment.
    fn contact_url(&self, id: &str) -> Result<Url, ActionError> {
        let mut url = self.endpoint("contacts")?;
        url.path_segments_mut()
            .map_err(|()| {
                ActionError::transport(format!("base {} cannot hold a path", self.base))
            })?
            .push(id);
        Ok(url)
    }

    async fn send_draft(
        &self,
        request: reqwest::RequestBuilder,
        draft: &Draft,
    ) -> Result<ContactRecord, ActionError> {
        let request = match &self.session_cookie {
            Some(cookie) => request.header(COOKIE, cookie.as_str()),
            None => request,
        };
        let response = request
            .json(draft)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_record(response).await
    }
}

#[async_trait]
impl ContactActions for HttpContactActions {
    async fn add_contact(&self, draft: &Draft) -> Result<ContactRecord, ActionError> {
        let url = self.endpoint("contacts")?;
        self.send_draft(self.client.post(url), draft).await
    }

    async fn update_contact(
        &self,
        id: &str,
        draft: &Draft,
    ) -> Result<ContactRecord, ActionError> {
        let url = self.contact_url(id)?;
        self.send_draft(self.client.put(url), draft).await
    }
}

fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn session_cookie_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .map(str::trim)
        .find(|pair| {
            pair.split_once('=')
                .is_some_and(|(name, _)| name == SESSION_COOKIE_NAME)
        })
        .map(str::to_owned)
}

async fn decode_record(response: Response) -> Result<ContactRecord, ActionError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, &body));
    }
    serde_json::from_slice(&body)
        .map_err(|err| ActionError::decode(format!("contact body: {err}")))
}

fn map_transport_error(error: reqwest::Error) -> ActionError {
    ActionError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ActionError {
    debug!(status = status.as_u16(), "contact request rejected");
    if status == StatusCode::BAD_REQUEST {
        if let Ok(ValidationBody { errors }) = serde_json::from_slice(body) {
            return ActionError::Invalid {
                messages: errors.into_iter().map(|error| error.msg).collect(),
            };
        }
    }
    if status.is_client_error() {
        let message = serde_json::from_slice::<MessageBody>(body)
            .map(|body| body.msg)
            .unwrap_or_else(|_| String::from_utf8_lossy(body).trim().to_owned());
        return ActionError::Refused {
            status: status.as_u16(),
            message,
        };
    }
    ActionError::transport(format!(
        "status {}: {}",
        status.as_u16(),
        String::from_utf8_lossy(body).trim()
    ))
}
