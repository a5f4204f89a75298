//! Login credentials used to establish a session.
//!
//! Inbound adapters parse raw payloads into [`LoginCredentials`] before they
//! talk to the [`LoginService`](crate::domain::ports::LoginService) port.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty; whitespace is preserved as supplied.
///
/// # Examples
/// ```
/// use contacts_backend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ann ", "secret").unwrap();
/// assert_eq!(creds.username(), "ann");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username suitable for account lookups.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
