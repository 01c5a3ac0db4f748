use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::docs;
use crate::api::users;

/// Built once at startup and shared by every request; nothing in it is
/// mutable afterwards, so handlers need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub api_doc: serde_json::Value,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/{user_id}", get(users::get_user_by_id))
        .route("/api-docs/openapi.json", get(docs::serve_api_doc))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(docs::swagger_ui())
}

pub async fn start_server(api_doc: serde_json::Value) {
    let state = Arc::new(AppState { api_doc });
    let app = app(state);

    let listener = TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    tracing::info!("Server running on http://0.0.0.0:3000");

    axum::serve(listener, app).await.expect("Server failed");
}
