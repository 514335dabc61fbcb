use axum::extract::State;
use std::sync::Arc;

use crate::weaviate::{ForwardResult, Method};
use crate::AppState;

/// GET /api/meta - Instance metadata (version, modules, hostname).
pub async fn get_meta(State(state): State<Arc<AppState>>) -> ForwardResult {
    state.weaviate.forward("meta", Method::Get, None).await
}

/// GET /api/nodes - Cluster node status and shard statistics.
pub async fn get_nodes(State(state): State<Arc<AppState>>) -> ForwardResult {
    state.weaviate.forward("nodes", Method::Get, None).await
}
