use serde_json::Value;

use crate::weaviate::{
    BulkDeleteOutcome, BulkDeleteReport, ClassDeleteError, ForwardResult, Method, WeaviateClient,
};

/// Delete every class in the upstream schema, one DELETE per class.
///
/// The sweep is sequential in schema order and never aborts early: a class
/// that fails at transport level is recorded while the rest proceed. An
/// upstream error status still counts as a deletion, matching the
/// single-class DELETE route. Only a transport failure on the initial
/// schema fetch short-circuits the whole operation.
pub async fn delete_all_classes(weaviate: &WeaviateClient) -> BulkDeleteOutcome {
    let schema = weaviate.forward("schema", Method::Get, None).await;
    let data = match schema {
        ForwardResult::Completed { data, .. } => data,
        failure => return BulkDeleteOutcome::UpstreamUnavailable(failure),
    };

    let classes: &[Value] = match data.get("classes").and_then(Value::as_array) {
        Some(classes) => classes,
        None => &[],
    };

    let mut deleted_classes = Vec::new();
    let mut errors = Vec::new();

    for descriptor in classes {
        let Some(name) = class_name(descriptor) else {
            tracing::warn!("Schema entry without a class name, skipping: {}", descriptor);
            continue;
        };

        match weaviate
            .forward(&format!("schema/{}", name), Method::Delete, None)
            .await
        {
            ForwardResult::Completed { status_code, .. } => {
                tracing::debug!("Deleted class {} (upstream {})", name, status_code);
                deleted_classes.push(name.to_string());
            }
            ForwardResult::TransportError { error } => {
                tracing::debug!("Failed to delete class {}: {}", name, error);
                errors.push(ClassDeleteError {
                    class: name.to_string(),
                    error,
                });
            }
        }
    }

    tracing::info!(
        "Schema purge finished: {} deleted, {} failed",
        deleted_classes.len(),
        errors.len()
    );

    BulkDeleteOutcome::Completed(BulkDeleteReport::new(deleted_classes, errors))
}

/// Class name from one schema descriptor, if present.
fn class_name(descriptor: &Value) -> Option<&str> {
    descriptor.get("class").and_then(Value::as_str)
}
