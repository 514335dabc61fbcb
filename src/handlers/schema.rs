use axum::extract::{Path, State};
use std::sync::Arc;

use crate::services::purge;
use crate::weaviate::{BulkDeleteOutcome, ForwardResult, Method};
use crate::AppState;

/// GET /api/schema - Fetch the full schema definition.
pub async fn get_schema(State(state): State<Arc<AppState>>) -> ForwardResult {
    state.weaviate.forward("schema", Method::Get, None).await
}

/// DELETE /api/schema/:class_name - Drop one class and every object in it.
pub async fn delete_class(
    State(state): State<Arc<AppState>>,
    Path(class_name): Path<String>,
) -> ForwardResult {
    state
        .weaviate
        .forward(&format!("schema/{}", class_name), Method::Delete, None)
        .await
}

/// POST /api/schema/delete-all - Drop every class in the schema.
pub async fn delete_all_classes(State(state): State<Arc<AppState>>) -> BulkDeleteOutcome {
    purge::delete_all_classes(&state.weaviate).await
}
