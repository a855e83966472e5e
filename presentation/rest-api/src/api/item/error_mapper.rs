use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            e if e.is_validation() => (StatusCode::BAD_REQUEST, "ValidationError"),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ItemError::LookupFailed => (StatusCode::BAD_GATEWAY, "LookupError"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
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
