//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use usercrud_domain::error::{CrudError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CrudError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(CrudError);

impl From<CrudError> for ApiError {
    fn from(err: CrudError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            CrudError::Validation(_) => StatusCode::BAD_REQUEST,
            CrudError::NotFound(_) => StatusCode::NOT_FOUND,
            CrudError::Conflict(_) => StatusCode::CONFLICT,
            CrudError::Connection(_) | CrudError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = ?self.0, "request failed");
            "internal server error".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use usercrud_domain::error::{ConflictError, NotFoundError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let err = ApiError::from(ValidationError::MissingId);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(CrudError::from(NotFoundError {
            entity: "User",
            id: "x".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_conflict_to_409() {
        let err = ApiError::from(CrudError::from(ConflictError {
            entity: "User",
            id: "x".to_string(),
        }));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn should_map_infrastructure_errors_to_500() {
        let conn = ApiError(CrudError::Connection(Box::new(std::io::Error::other("down"))));
        let other = ApiError(CrudError::Storage(Box::new(std::io::Error::other("boom"))));
        assert_eq!(
            conn.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            other.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
