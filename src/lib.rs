pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod weaviate;

use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use config::AppConfig;
use weaviate::WeaviateClient;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub weaviate: WeaviateClient,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let weaviate = WeaviateClient::new(&config.weaviate, config.api.health_timeout());
        Self { config, weaviate }
    }
}

/// Build the full dashboard router against the given state.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Dashboard page and assets
        .route("/", get(handlers::dashboard::index))
        .route("/static/css/style.css", get(handlers::dashboard::stylesheet))
        .route("/static/js/script.js", get(handlers::dashboard::script))
        // Proxied Weaviate API
        .merge(api_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/health", get(handlers::health::health_check))
        .route("/api/schema", get(handlers::schema::get_schema))
        // Static segment registered alongside the :class_name capture;
        // the router prefers the literal match.
        .route(
            "/api/schema/delete-all",
            post(handlers::schema::delete_all_classes),
        )
        .route(
            "/api/schema/:class_name",
            delete(handlers::schema::delete_class),
        )
        .route(
            "/api/objects/:class_name",
            get(handlers::objects::list_objects),
        )
        .route(
            "/api/objects/:class_name/:object_id",
            delete(handlers::objects::delete_object),
        )
        .route("/api/meta", get(handlers::meta::get_meta))
        .route("/api/nodes", get(handlers::meta::get_nodes))
}
