//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod contact_repository;
mod contacts_command;
mod contacts_query;
mod login_service;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
pub use contact_repository::{ContactRepository, ContactRepositoryError};
pub use contacts_command::{ContactRemoved, ContactsCommand};
pub use contacts_query::ContactsQuery;
pub use login_service::{FIXTURE_ACCOUNTS, FixtureLoginService, LoginService};
