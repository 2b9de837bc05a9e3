//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CrudError`]
//! at the port boundary.

use std::error::Error as StdError;

/// Boxed source error carried by the infrastructure variants.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Top-level error returned by application services and repository ports.
#[derive(Debug, thiserror::Error)]
pub enum CrudError {
    /// The request is missing a required value or carries a malformed one.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No record matches the requested identifier.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// A write collided with an existing record.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The database could not be reached.
    #[error("connection error")]
    Connection(#[source] BoxError),

    /// Any other storage-level failure.
    #[error("storage error")]
    Storage(#[source] BoxError),
}

/// Invalid or missing input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier path parameter was empty.
    #[error("missing identifier")]
    MissingId,

    /// The identifier path parameter could not be parsed.
    #[error("invalid identifier {0:?}")]
    InvalidId(String),
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A unique constraint rejected a write.
#[derive(Debug, thiserror::Error)]
#[error("{entity} {id} already exists")]
pub struct ConflictError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_not_found_with_entity_and_id() {
        let err: CrudError = NotFoundError {
            entity: "User",
            id: "abc".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "User abc not found");
    }

    #[test]
    fn should_convert_validation_error_via_from() {
        let err: CrudError = ValidationError::MissingId.into();
        assert!(matches!(
            err,
            CrudError::Validation(ValidationError::MissingId)
        ));
    }

    #[test]
    fn should_keep_source_for_storage_errors() {
        let io = std::io::Error::other("disk on fire");
        let err = CrudError::Storage(Box::new(io));
        assert_eq!(err.to_string(), "storage error");
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }
}
