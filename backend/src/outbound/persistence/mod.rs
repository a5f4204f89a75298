//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! types. Row structs and the table schema stay private to this module, and
//! every database failure is mapped to the port's error enum.
//!
//! ```ignore
//! use contacts_backend::outbound::persistence::{DbPool, DieselContactRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/contacts")).await?;
//! let repo = DieselContactRepository::new(pool);
//! ```

mod diesel_contact_repository;
mod diesel_error_mapping;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
