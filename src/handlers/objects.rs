use axum::extract::{Path, Query, State};
use serde::Deserialize;
use std::sync::Arc;

use crate::weaviate::{ForwardResult, Method};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Page size. Kept as a raw string so a bad value falls back to the
    /// default instead of rejecting the request before the handler runs.
    pub limit: Option<String>,
}

/// GET /api/objects/:class_name - List objects of one class.
///
/// Query extraction is optional so a malformed query string (a duplicated
/// limit key, say) falls back to the default instead of a non-JSON
/// rejection.
pub async fn list_objects(
    State(state): State<Arc<AppState>>,
    Path(class_name): Path<String>,
    query: Option<Query<ListQuery>>,
) -> ForwardResult {
    let limit = effective_limit(
        query.as_ref().and_then(|q| q.limit.as_deref()),
        state.config.api.default_object_limit,
        state.config.api.max_objects_per_request,
    );

    state
        .weaviate
        .forward(
            &format!("objects?class={}&limit={}", class_name, limit),
            Method::Get,
            None,
        )
        .await
}

/// DELETE /api/objects/:class_name/:object_id - Delete one object.
pub async fn delete_object(
    State(state): State<Arc<AppState>>,
    Path((class_name, object_id)): Path<(String, String)>,
) -> ForwardResult {
    state
        .weaviate
        .forward(
            &format!("objects/{}/{}", class_name, object_id),
            Method::Delete,
            None,
        )
        .await
}

/// Clamp the requested page size to something the upstream can serve.
///
/// Missing, unparseable, and non-positive values all fall back to the
/// default; the cap applies last.
fn effective_limit(requested: Option<&str>, default: i64, max: i64) -> i64 {
    requested
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .unwrap_or(default)
        .min(max)
}
