//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the contact API's wire shapes:
//!
//! - `400` → `{"errors":[{"msg","param","location","value"?}]}`
//! - `401` / `404` → `{"msg": ..}`
//! - `500` → plain text `Server Error!`

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::{Error, ErrorCode, FieldError, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body returned for every internal failure.
pub const SERVER_ERROR_BODY: &str = "Server Error!";

/// Flat `{msg}` error body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageBody {
    /// Human-readable message.
    pub msg: String,
}

/// Structured validation error body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ValidationBody {
    /// One entry per rejected field.
    #[schema(value_type = Vec<Object>)]
    pub errors: Vec<FieldError>,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn field_errors(error: &Error) -> Vec<FieldError> {
    error
        .details()
        .cloned()
        .and_then(|details| serde_json::from_value::<Vec<FieldError>>(details).ok())
        .filter(|errors| !errors.is_empty())
        .unwrap_or_else(|| vec![FieldError::body("", error.message())])
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        match self.code() {
            ErrorCode::InternalError => {
                error!(
                    message = %self.message(),
                    details = ?self.details().unwrap_or(&serde_json::Value::Null),
                    "request failed with internal error"
                );
                builder
                    .content_type(ContentType::plaintext())
                    .body(SERVER_ERROR_BODY)
            }
            ErrorCode::InvalidRequest => builder.json(ValidationBody {
                errors: field_errors(self),
            }),
            ErrorCode::Unauthorized | ErrorCode::NotFound => builder.json(MessageBody {
                msg: self.message().to_owned(),
            }),
        }
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Error::internal(err.to_string())
    }
}
