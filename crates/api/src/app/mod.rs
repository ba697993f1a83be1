//! HTTP API application wiring (Axum router + store wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and body extraction helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use stockroom_infra::{ItemStore, item_store, seed};

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared handler state. The store is owned by whoever builds the router; handlers
/// only hold a reference-counted handle to it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

/// Build the full HTTP router from configuration (public entrypoint used by `main.rs`).
///
/// Connects the configured store and seeds it with the sample catalogue when enabled.
pub async fn build_app(config: &ApiConfig) -> anyhow::Result<Router> {
    let store = item_store::connect(&config.store).await?;
    if config.store.seed_sample_data {
        seed::seed_sample_items(&*store).await?;
    }
    Ok(router(store, &config.base_path))
}

/// Router over an explicit store instance, with the item routes mounted at `base_path`.
pub fn router(store: Arc<dyn ItemStore>, base_path: &str) -> Router {
    let items = routes::items::router().layer(Extension(AppState { store }));

    let app = Router::new().route("/health", get(routes::system::health));
    let app = if base_path.is_empty() || base_path == "/" {
        app.merge(items)
    } else {
        app.nest(base_path, items)
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
