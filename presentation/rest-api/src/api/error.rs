use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// Rejection for a path identifier that is not a UUID.
    pub fn invalid_id() -> Json<Self> {
        Json(Self {
            name: "ValidationError".to_string(),
            message: "item.invalid_id".to_string(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
