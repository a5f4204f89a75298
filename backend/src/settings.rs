//! Server settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CONTACTS_*` environment variables and config
//! files, in that order of precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Invalid setting values detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr {
        /// Configured value.
        value: String,
        /// Parser message.
        message: String,
    },
    /// A boolean setting holds something other than `true`/`false`/`1`/`0`.
    #[error("invalid boolean for {name}: {value:?}")]
    Flag {
        /// Setting name.
        name: &'static str,
        /// Configured value.
        value: String,
    },
}

fn parse_flag(
    name: &'static str,
    raw: Option<&str>,
    default: bool,
) -> Result<bool, SettingsError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(default);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(SettingsError::Flag {
            name,
            value: raw.to_owned(),
        }),
    }
}

/// Configuration for the contacts server.
///
/// Boolean switches are kept as strings so an absent CLI flag stays `None`
/// and does not mask environment or file values; read them through the
/// accessors.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CONTACTS")]
pub struct ContactsSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Path of the session signing key.
    pub session_key_file: Option<PathBuf>,
    /// Mark the session cookie `Secure` (`true`/`false`).
    pub session_cookie_secure: Option<String>,
    /// Fall back to a generated session key when the key file is missing.
    pub session_allow_ephemeral: Option<String>,
}

impl ContactsSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::BindAddr`] when the configured value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Session key path, falling back to the mounted secret location.
    pub fn session_key_file(&self) -> PathBuf {
        self.session_key_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether the session cookie is `Secure`; defaults to `true`.
    ///
    /// # Errors
    /// [`SettingsError::Flag`] when the value is not a boolean.
    pub fn session_cookie_secure(&self) -> Result<bool, SettingsError> {
        parse_flag(
            "session_cookie_secure",
            self.session_cookie_secure.as_deref(),
            true,
        )
    }

    /// Whether a missing key file may be replaced by a generated key;
    /// defaults to `false`.
    ///
    /// # Errors
    /// [`SettingsError::Flag`] when the value is not a boolean.
    pub fn session_allow_ephemeral(&self) -> Result<bool, SettingsError> {
        parse_flag(
            "session_allow_ephemeral",
            self.session_allow_ephemeral.as_deref(),
            false,
        )
    }
}
