use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            err if err.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ProductError::Storage(_) => (StatusCode::BAD_GATEWAY, "StorageError"),
            ProductError::EventPublish(_) => (StatusCode::BAD_GATEWAY, "EventPublishError"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        if status.is_server_error() {
            tracing::error!("Product request failed: {self:?}");
        }

        // Storage failures surface the backend's own code.
        let message = match &self {
            ProductError::Storage(inner) => inner.to_string(),
            other => other.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
