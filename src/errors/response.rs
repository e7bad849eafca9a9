use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::errors::ApiError;

// The IntoResponse trait implementation converts ApiError into a
// well-formed HTTP response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            // Caller is either unknown or anonymous
            ApiError::InvalidCredentials | ApiError::NotAuthenticated => {
                StatusCode::UNAUTHORIZED
            }

            // Caller is known but lacks the required role
            ApiError::AdminRequired => StatusCode::FORBIDDEN,

            ApiError::NotFound(_) => StatusCode::NOT_FOUND,

            // Signing failures are internal server errors
            ApiError::Token(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
