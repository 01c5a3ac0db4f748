use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Request-level failure, rendered as a `{"error": <message>}` JSON body.
///
/// Only CreateUser can fail; everything else is well-formed by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(&'static str),
}

impl ApiError {
    pub fn body_required() -> Self {
        Self::Validation("JSON body required")
    }

    pub fn fields_required() -> Self {
        Self::Validation("Name and email required")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
        }
    }
}
