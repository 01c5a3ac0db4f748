use std::{fs, path::Path, sync::Arc};

use axum::{Json, extract::State, response::IntoResponse};
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::api::server::AppState;

/// Reads the pre-authored OpenAPI document at startup. The service keeps it
/// as opaque JSON; only the documentation UI interprets its structure.
pub fn load_api_doc(path: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(path).expect("Failed to read the OpenAPI document");
    serde_json::from_str(&raw).expect("OpenAPI document is not valid JSON")
}

/// GET /api-docs/openapi.json
pub async fn serve_api_doc(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.api_doc.clone())
}

/// Swagger UI mounted at /docs, pointed at the served document.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").config(Config::new(["/api-docs/openapi.json"]))
}
