use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// GET /api/health - Probe the upstream and report connection status.
///
/// `success` means the probe got any answer at all; `connected` requires an
/// actual 200 from `/v1/meta`. The route itself always answers 200 so the
/// dashboard can render the disconnected state.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let status = state.weaviate.ping().await;

    Json(json!({
        "success": status.is_some(),
        "connected": status == Some(200),
        "url": state.weaviate.base_url(),
    }))
}
