//! Storage-specific error type wrapping sqlx errors.

use usercrud_domain::error::{ConflictError, CrudError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Whether the failure means the database could not be reached at all,
    /// as opposed to a statement failing on a live connection.
    #[must_use]
    pub fn is_connection(&self) -> bool {
        matches!(
            self,
            Self::Database(
                sqlx::Error::PoolTimedOut
                    | sqlx::Error::PoolClosed
                    | sqlx::Error::Io(_)
                    | sqlx::Error::Tls(_)
                    | sqlx::Error::WorkerCrashed
            )
        )
    }

    /// Whether a unique or primary key constraint rejected the statement.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Database(sqlx::Error::Database(err)) => err.is_unique_violation(),
            Self::Database(_) => false,
        }
    }

    /// Convert an insert failure, reporting key collisions on `id` as
    /// [`CrudError::Conflict`].
    pub(crate) fn into_insert_error(self, entity: &'static str, id: String) -> CrudError {
        if self.is_unique_violation() {
            ConflictError { entity, id }.into()
        } else {
            self.into()
        }
    }
}

impl From<StorageError> for CrudError {
    fn from(err: StorageError) -> Self {
        if err.is_connection() {
            Self::Connection(Box::new(err))
        } else {
            Self::Storage(Box::new(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_classify_pool_timeout_as_connection_error() {
        let err: CrudError = StorageError::from(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, CrudError::Connection(_)));
    }

    #[test]
    fn should_classify_row_not_found_as_storage_error() {
        let err: CrudError = StorageError::from(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, CrudError::Storage(_)));
    }

    #[test]
    fn should_not_report_conflict_for_non_database_errors() {
        let err = StorageError::from(sqlx::Error::PoolClosed)
            .into_insert_error("User", "abc".to_string());
        assert!(matches!(err, CrudError::Connection(_)));
    }
}
