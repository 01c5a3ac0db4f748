use std::path::Path;

use tracing_subscriber::EnvFilter;

pub mod api;
pub mod models;

#[tokio::main]
async fn main() {
    // Developer-friendly defaults: everything at debug unless RUST_LOG says otherwise.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    tracing::info!("Starting users backend...");

    // The OpenAPI document is read exactly once; every request after that
    // serves the same in-memory copy.
    let api_doc = api::docs::load_api_doc(Path::new("swagger.json"));

    api::server::start_server(api_doc).await;
}
