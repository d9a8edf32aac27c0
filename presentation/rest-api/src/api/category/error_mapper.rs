use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category::errors::CategoryError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CategoryError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CategoryError::NameRequired => (StatusCode::BAD_REQUEST, "ValidationError"),
            CategoryError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CategoryError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            CategoryError::Repository(err) => {
                tracing::error!("Category request failed: {err:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "InternalError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_to_bad_request() {
        let (status, json) = CategoryError::NameRequired.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "category.name_required");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            CategoryError::Repository(RepositoryError::DatabaseError).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
