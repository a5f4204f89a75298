//! Port through which the form persists a submitted draft.

use async_trait::async_trait;

use crate::draft::{ContactRecord, Draft};

/// Failures reported by a [`ContactActions`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    /// The backend rejected one or more fields.
    #[error("contact rejected: {}", messages.join("; "))]
    Invalid {
        /// One message per rejected field.
        messages: Vec<String>,
    },
    /// The backend refused the request (missing session, not the owner,
    /// unknown contact).
    #[error("request refused with status {status}: {message}")]
    Refused {
        /// HTTP status code.
        status: u16,
        /// The backend's `msg`, or the raw body.
        message: String,
    },
    /// The request did not complete.
    #[error("contact request failed: {message}")]
    Transport {
        /// Underlying failure.
        message: String,
    },
    /// The response body could not be decoded.
    #[error("invalid contact response: {message}")]
    Decode {
        /// Why decoding failed.
        message: String,
    },
}

impl ActionError {
    /// Build a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a decode failure.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Create and update actions dispatched on submit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactActions: Send + Sync {
    /// Store `draft` as a new contact.
    async fn add_contact(&self, draft: &Draft) -> Result<ContactRecord, ActionError>;

    /// Overwrite contact `id` with the fields of `draft`.
    async fn update_contact(&self, id: &str, draft: &Draft)
    -> Result<ContactRecord, ActionError>;
}
