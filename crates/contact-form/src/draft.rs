//! Draft contact state and the record shape returned by the backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised while editing a draft.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    /// The input name does not match a draft field.
    #[error("unknown field: {name}")]
    UnknownField {
        /// Rejected input name.
        name: String,
    },
    /// The contact type is neither `personal` nor `professional`.
    #[error("unknown contact type: {value}")]
    UnknownType {
        /// Rejected type value.
        value: String,
    },
}

/// Relationship category of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    /// Friends and family; the default.
    #[default]
    Personal,
    /// Work contacts.
    Professional,
}

impl ContactType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = DraftError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "personal" => Ok(Self::Personal),
            "professional" => Ok(Self::Professional),
            other => Err(DraftError::UnknownType {
                value: other.to_owned(),
            }),
        }
    }
}

/// A stored contact as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Contact id.
    pub id: String,
    /// Owning user id.
    pub user: String,
    /// Display name.
    pub name: String,
    /// Email address, when stored.
    #[serde(default)]
    pub email: Option<String>,
    /// Phone number, when stored.
    #[serde(default)]
    pub phone: Option<String>,
    /// Relationship category.
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    /// RFC 3339 creation timestamp.
    pub date: String,
}

/// Editable fields, named after the form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// `name` input.
    Name,
    /// `email` input.
    Email,
    /// `phone` input.
    Phone,
    /// `type` radio group.
    Type,
}

impl FromStr for Field {
    type Err = DraftError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "type" => Ok(Self::Type),
            other => Err(DraftError::UnknownField {
                name: other.to_owned(),
            }),
        }
    }
}

/// Unsaved contact being edited.
///
/// Serialises as the backend's create/update request body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Draft {
    /// Display name.
    pub name: String,
    /// Email address; may be empty.
    pub email: String,
    /// Phone number; may be empty.
    pub phone: String,
    /// Relationship category.
    #[serde(rename = "type")]
    pub contact_type: ContactType,
}

impl Draft {
    /// Overwrite a single field.
    ///
    /// # Errors
    /// [`DraftError::UnknownType`] when `field` is [`Field::Type`] and `value`
    /// is not a known contact type; the draft is left unchanged.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), DraftError> {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Type => self.contact_type = value.parse()?,
        }
        Ok(())
    }
}

impl From<&ContactRecord> for Draft {
    fn from(record: &ContactRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone().unwrap_or_default(),
            phone: record.phone.clone().unwrap_or_default(),
            contact_type: record.contact_type,
        }
    }
}
