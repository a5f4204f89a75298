//! Domain primitives, aggregates and use-case services.
//!
//! Purpose: define the strongly typed contact model and the services that
//! enforce ownership before any mutation reaches persistence. Inbound and
//! outbound adapters depend on this module; it depends on neither.
//!
//! Public surface:
//! - Error / ErrorCode / FieldError: failure payloads shared by every port.
//! - Contact and its value types: the stored record and its inputs.
//! - ContactsService: the contact store use-cases.
//! - UserId / LoginCredentials: caller identity.
//! - TraceId: per-request correlation identifier.

pub mod auth;
pub mod contact;
pub mod contacts_service;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::contact::{
    Contact, ContactId, ContactName, ContactPatch, ContactType, ContactValidationError, NewContact,
};
pub use self::contacts_service::{CONTACT_NOT_FOUND, ContactsService, NOT_AUTHORIZED};
pub use self::error::{Error, ErrorCode, FieldError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{UserId, UserValidationError};
