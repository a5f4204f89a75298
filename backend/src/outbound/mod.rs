//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repository using Diesel ORM
//! - **memory**: process-local repository for development and tests
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
