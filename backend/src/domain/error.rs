//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication is missing, or the caller does not own the resource.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain or its adapters.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` should be non-empty; adapters render it verbatim.
/// - `details`, when present for [`ErrorCode::InvalidRequest`], is a JSON
///   array of field errors (see [`FieldError`]).
///
/// # Examples
/// ```
/// use contacts_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Contact not found!");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message(), "Contact not found!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error.
    ///
    /// Captures the current trace identifier if one is in scope so the error
    /// is correlated automatically.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!([{ "param": "name" }]));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Build a validation error from one or more field errors.
    ///
    /// The first field error's message becomes the error message.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::domain::{Error, ErrorCode, FieldError};
    ///
    /// let err = Error::validation(vec![FieldError::body("name", "Name is required!")]);
    /// assert_eq!(err.code(), ErrorCode::InvalidRequest);
    /// assert_eq!(err.message(), "Name is required!");
    /// ```
    pub fn validation(errors: Vec<FieldError>) -> Self {
        let message = errors
            .first()
            .map_or_else(|| "invalid request".to_owned(), |err| err.msg.clone());
        let details = serde_json::to_value(&errors).unwrap_or(Value::Null);
        Self::invalid_request(message).with_details(details)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

/// A single field-level validation failure.
///
/// Serialises as `{"msg": .., "param": .., "location": ..}` with an optional
/// `value` echoing the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Human-readable message.
    pub msg: String,
    /// Name of the offending request field.
    pub param: String,
    /// Where the field was read from (`body`, `params`).
    pub location: String,
    /// Rejected value, when it is safe to echo.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldError {
    /// Field error for a JSON body field.
    pub fn body(param: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: "body".to_owned(),
            value: None,
        }
    }

    /// Echo the rejected value alongside the error.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
    #[case(Error::unauthorized("who"), ErrorCode::Unauthorized)]
    #[case(Error::not_found("gone"), ErrorCode::NotFound)]
    #[case(Error::internal("boom"), ErrorCode::InternalError)]
    fn constructors_set_code(#[case] err: Error, #[case] expected: ErrorCode) {
        assert_eq!(err.code(), expected);
    }

    #[rstest]
    fn validation_collects_field_errors() {
        let err = Error::validation(vec![
            FieldError::body("name", "Name is required!"),
            FieldError::body("type", "Type must be personal or professional").with_value("work"),
        ]);

        assert_eq!(err.message(), "Name is required!");
        assert_eq!(
            err.details(),
            Some(&json!([
                { "msg": "Name is required!", "param": "name", "location": "body" },
                {
                    "msg": "Type must be personal or professional",
                    "param": "type",
                    "location": "body",
                    "value": "work"
                }
            ]))
        );
    }

    #[rstest]
    fn validation_without_field_errors_uses_generic_message() {
        let err = Error::validation(Vec::new());
        assert_eq!(err.message(), "invalid request");
    }

    #[tokio::test]
    async fn new_captures_trace_id_in_scope() {
        let trace_id: TraceId = "00000000-0000-0000-0000-000000000001"
            .parse()
            .expect("valid uuid");
        let err = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
        assert_eq!(err.trace_id(), Some("00000000-0000-0000-0000-000000000001"));
    }

    #[rstest]
    fn new_without_scope_has_no_trace_id() {
        assert!(Error::not_found("missing").trace_id().is_none());
    }
}
