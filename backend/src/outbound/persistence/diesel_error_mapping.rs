//! Translation of pool and Diesel failures into [`ContactRepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::ContactRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    ContactRepositoryError::connection(error.into_message())
}

/// Driver detail stays in debug logs; callers only see a category.
pub(super) fn map_diesel_error(error: DieselError) -> ContactRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ContactRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            ContactRepositoryError::query("contact violates a table constraint")
        }
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        _ => ContactRepositoryError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_errors_are_connection_failures() {
        let err = map_pool_error(PoolError::Checkout {
            message: "timed out".to_owned(),
        });
        assert_eq!(err, ContactRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_failure() {
        let err = map_diesel_error(DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection".to_owned()),
        ));
        assert!(matches!(err, ContactRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn other_errors_are_query_failures() {
        let err = map_diesel_error(DieselError::NotFound);
        assert_eq!(err, ContactRepositoryError::query("database error"));
    }
}
