//! Driving port for login/authentication use-cases.
//!
//! Inbound adapters call it to turn credentials into a user id without
//! knowing the backing identity provider. Account management is outside this
//! service; the fixture below is the development identity source.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, UserId};

/// Domain use-case port for authentication.
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated user id.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error>;
}

/// Development accounts accepted by [`FixtureLoginService`].
///
/// Two accounts exist so contact ownership can be exercised end to end.
pub const FIXTURE_ACCOUNTS: [(&str, &str, &str); 2] = [
    ("ann", "password", "123e4567-e89b-12d3-a456-426614174000"),
    ("bob", "password", "3fa85f64-5717-4562-b3fc-2c963f66afa6"),
];

/// In-memory authenticator backed by [`FIXTURE_ACCOUNTS`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let account = FIXTURE_ACCOUNTS.iter().find(|(username, password, _)| {
            *username == credentials.username() && *password == credentials.password()
        });
        match account {
            Some((_, _, id)) => UserId::new(id)
                .map_err(|err| Error::internal(format!("invalid fixture user id: {err}"))),
            None => Err(Error::unauthorized("Invalid credentials")),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("ann", "password", Some("123e4567-e89b-12d3-a456-426614174000"))]
    #[case("bob", "password", Some("3fa85f64-5717-4562-b3fc-2c963f66afa6"))]
    #[case("ann", "wrong", None)]
    #[case("carol", "password", None)]
    #[tokio::test]
    async fn fixture_login_service_accepts_known_accounts(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: Option<&str>,
    ) {
        let creds =
            LoginCredentials::try_from_parts(username, password).expect("credentials shape");
        let result = FixtureLoginService.authenticate(&creds).await;
        match (expected, result) {
            (Some(id), Ok(user)) => assert_eq!(user.as_ref(), id),
            (None, Err(err)) => assert_eq!(err.code(), ErrorCode::Unauthorized),
            (Some(_), Err(err)) => panic!("expected success, got error: {err:?}"),
            (None, Ok(user)) => panic!("expected failure, got success: {user}"),
        }
    }
}
