use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, body::Bytes, extract::Path, http::StatusCode, response::IntoResponse};
use serde_json::Value;

use crate::api::error::ApiError;
use crate::models::User;

/// GET /api/users
///
/// Returns the two demo users, rebuilt on every call.
pub async fn list_users() -> impl IntoResponse {
    let users = vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ];

    (StatusCode::OK, Json(users))
}

/// POST /api/users
///
/// The body is taken as raw bytes and parsed here rather than through the
/// `Json` extractor, so a missing, malformed, or non-object body all map to
/// the same validation error instead of an extractor rejection.
pub async fn create_user(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let data: Value = serde_json::from_slice(&body).map_err(|_| ApiError::body_required())?;
    let fields = match data.as_object() {
        Some(map) if !map.is_empty() => map,
        _ => return Err(ApiError::body_required()),
    };

    let name = non_empty_string(fields.get("name")).ok_or_else(ApiError::fields_required)?;
    let email = non_empty_string(fields.get("email")).ok_or_else(ApiError::fields_required)?;

    let user = User {
        id: time_based_id(),
        name: name.to_string(),
        email: email.to_string(),
    };

    tracing::debug!(id = user.id, "created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{user_id}
///
/// Synthesizes a user for any id, including ids that were never created.
/// Non-integer ids are rejected by the path extractor before this runs.
pub async fn get_user_by_id(Path(user_id): Path<u64>) -> impl IntoResponse {
    let user = User {
        id: user_id,
        name: "John Doe".to_string(),
        email: format!("user{user_id}@example.com"),
    };

    (StatusCode::OK, Json(user))
}

fn non_empty_string(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

// Seconds since the Unix epoch. Two creations within the same second collide;
// acceptable for demo data that is never stored.
fn time_based_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}
