//! Contact records owned by a single user.
//!
//! A [`Contact`] is created from a validated [`NewContact`], mutated by
//! applying a [`ContactPatch`] (only supplied fields overwrite), and removed
//! by explicit deletion. There is no versioning or soft-delete.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserId;

/// Validation failures for contact input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name was missing or blank once trimmed.
    EmptyName,
    /// `type` was not one of the known contact types.
    UnknownType { value: String },
}

impl ContactValidationError {
    /// Name of the request field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::UnknownType { .. } => "type",
        }
    }

    /// Rejected input, when there was any.
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::UnknownType { value } => Some(value.as_str()),
        }
    }
}

impl fmt::Display for ContactValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name is required!"),
            Self::UnknownType { .. } => write!(f, "Type must be personal or professional"),
        }
    }
}

impl std::error::Error for ContactValidationError {}

/// Identifier of a stored contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a fresh identifier for a new contact.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Relationship category of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContactType {
    /// Friends and family. New contacts default to this.
    #[default]
    Personal,
    /// Work relationships.
    Professional,
}

impl ContactType {
    /// Wire representation.
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
    type Err = ContactValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" => Ok(Self::Personal),
            "professional" => Ok(Self::Professional),
            other => Err(ContactValidationError::UnknownType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Non-empty contact name, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    /// Validate and construct a name.
    ///
    /// # Examples
    /// ```
    /// use contacts_backend::domain::ContactName;
    ///
    /// assert_eq!(ContactName::new("  Ann ").unwrap().as_ref(), "Ann");
    /// assert!(ContactName::new("   ").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self, ContactValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trim optional free text; blank input means "absent".
fn normalise_optional(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
}

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier.
    pub id: ContactId,
    /// The only user allowed to read or mutate this record.
    pub owner: UserId,
    /// Display name.
    pub name: ContactName,
    /// Optional email address.
    pub email: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Relationship category.
    pub contact_type: ContactType,
    /// Creation timestamp; list ordering key.
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Materialise a new contact for `owner` from validated input.
    pub fn create(owner: UserId, input: NewContact, created_at: DateTime<Utc>) -> Self {
        let NewContact {
            name,
            email,
            phone,
            contact_type,
        } = input;
        Self {
            id: ContactId::random(),
            owner,
            name,
            email,
            phone,
            contact_type,
            created_at,
        }
    }

    /// Whether `user` owns this contact.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner == user
    }

    /// Overwrite the fields present in `patch`; everything else is kept.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use contacts_backend::domain::{Contact, ContactPatch, NewContact, UserId};
    ///
    /// let input = NewContact::try_from_parts(Some("Ann".into()), None, None, None).unwrap();
    /// let mut contact = Contact::create(UserId::random(), input, Utc::now());
    /// let patch = ContactPatch::try_from_parts(None, None, Some("555".into()), None).unwrap();
    /// contact.apply(patch);
    /// assert_eq!(contact.name.as_ref(), "Ann");
    /// assert_eq!(contact.phone.as_deref(), Some("555"));
    /// ```
    pub fn apply(&mut self, patch: ContactPatch) {
        let ContactPatch {
            name,
            email,
            phone,
            contact_type,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(contact_type) = contact_type {
            self.contact_type = contact_type;
        }
    }
}

/// Validated input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: ContactName,
    email: Option<String>,
    phone: Option<String>,
    contact_type: ContactType,
}

impl NewContact {
    /// Build creation input, accumulating every field error.
    ///
    /// A missing `contact_type` defaults to [`ContactType::Personal`].
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        contact_type: Option<String>,
    ) -> Result<Self, Vec<ContactValidationError>> {
        let name = ContactName::new(name.unwrap_or_default());
        let contact_type = contact_type
            .map(|raw| raw.parse::<ContactType>())
            .transpose();

        match (name, contact_type) {
            (Ok(name), Ok(contact_type)) => Ok(Self {
                name,
                email: normalise_optional(email),
                phone: normalise_optional(phone),
                contact_type: contact_type.unwrap_or_default(),
            }),
            (name, contact_type) => Err(name
                .err()
                .into_iter()
                .chain(contact_type.err())
                .collect()),
        }
    }

    /// Validated name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Validated type.
    pub fn contact_type(&self) -> ContactType {
        self.contact_type
    }
}

/// Partial update: `None` leaves the stored field untouched.
///
/// For `email`/`phone`, `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    name: Option<ContactName>,
    email: Option<Option<String>>,
    phone: Option<Option<String>>,
    contact_type: Option<ContactType>,
}

impl ContactPatch {
    /// Build a patch from the fields present in a request.
    ///
    /// A present-but-blank name is rejected so stored contacts keep a
    /// non-empty name. A present-but-blank email or phone clears it.
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        contact_type: Option<String>,
    ) -> Result<Self, Vec<ContactValidationError>> {
        let name = name.map(ContactName::new).transpose();
        let contact_type = contact_type
            .map(|raw| raw.parse::<ContactType>())
            .transpose();

        match (name, contact_type) {
            (Ok(name), Ok(contact_type)) => Ok(Self {
                name,
                email: email.map(|value| normalise_optional(Some(value))),
                phone: phone.map(|value| normalise_optional(Some(value))),
                contact_type,
            }),
            (name, contact_type) => Err(name
                .err()
                .into_iter()
                .chain(contact_type.err())
                .collect()),
        }
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
