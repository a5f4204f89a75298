//! Shared validation helpers for inbound HTTP adapters.
//!
//! Everything here turns a rejected input into a domain [`Error`] whose
//! details carry the `{msg, param, location, value?}` field list rendered by
//! the error adapter.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::{
    CONTACT_NOT_FOUND, ContactId, ContactValidationError, Error, FieldError, LoginValidationError,
};

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

const USERNAME: FieldName = FieldName::new("username");
const PASSWORD: FieldName = FieldName::new("password");

fn contact_field_error(err: &ContactValidationError) -> FieldError {
    let field = FieldError::body(err.field(), err.to_string());
    match err.rejected_value() {
        Some(value) => field.with_value(value),
        None => field,
    }
}

/// Map contact validation failures to a `400` field list.
pub(crate) fn contact_validation_error(errors: &[ContactValidationError]) -> Error {
    Error::validation(errors.iter().map(contact_field_error).collect())
}

/// Map a login validation failure to a `400` field list.
pub(crate) fn login_validation_error(err: &LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyUsername => USERNAME,
        LoginValidationError::EmptyPassword => PASSWORD,
    };
    Error::validation(vec![FieldError::body(field.as_str(), err.to_string())])
}

/// Parse a contact id path segment.
///
/// An id that cannot name a stored contact is reported the same way as an
/// unknown one.
pub(crate) fn parse_contact_id(raw: &str) -> Result<ContactId, Error> {
    raw.parse::<ContactId>().map_err(|err| {
        debug!(id = raw, error = %err, "rejecting malformed contact id");
        Error::not_found(CONTACT_NOT_FOUND)
    })
}

fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting malformed JSON body");
    let field = FieldError::body("body", format!("Request body is not valid JSON: {err}"));
    Error::validation(vec![field]).into()
}

/// JSON extractor configuration rendering body errors in the API's `400`
/// shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(16 * 1024)
        .error_handler(json_payload_error)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    fn contact_errors_keep_field_and_value() {
        let err = contact_validation_error(&[
            ContactValidationError::EmptyName,
            ContactValidationError::UnknownType {
                value: "family".to_owned(),
            },
        ]);

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "Name is required!");
        assert_eq!(
            err.details().cloned(),
            Some(json!([
                { "msg": "Name is required!", "param": "name", "location": "body" },
                {
                    "msg": "Type must be personal or professional",
                    "param": "type",
                    "location": "body",
                    "value": "family"
                }
            ]))
        );
    }

    #[rstest]
    #[case(LoginValidationError::EmptyUsername, "username")]
    #[case(LoginValidationError::EmptyPassword, "password")]
    fn login_errors_name_the_field(#[case] err: LoginValidationError, #[case] param: &str) {
        let mapped = login_validation_error(&err);
        let details = mapped.details().cloned().unwrap_or(Value::Null);

        assert_eq!(
            details.pointer("/0/param").and_then(Value::as_str),
            Some(param)
        );
    }

    #[rstest]
    #[case("not-a-uuid")]
    #[case("")]
    #[case("123")]
    fn malformed_contact_ids_are_not_found(#[case] raw: &str) {
        let err = parse_contact_id(raw).expect_err("malformed id");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.message(), CONTACT_NOT_FOUND);
    }

    #[rstest]
    fn well_formed_contact_ids_parse() {
        let id = ContactId::random();
        assert_eq!(
            parse_contact_id(&id.to_string()).expect("valid id"),
            id
        );
    }
}
