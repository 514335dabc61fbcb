use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::{json, Value};

/// HTTP methods the dashboard forwards to Weaviate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// Outcome of one proxied round trip to Weaviate.
///
/// A completed round trip is `Completed` no matter what status the upstream
/// sent; a Weaviate 404 or 422 is still a successful proxy operation.
/// `TransportError` means the exchange never completed at all.
#[derive(Debug, Clone, PartialEq)]
pub enum ForwardResult {
    Completed { data: Value, status_code: u16 },
    TransportError { error: String },
}

impl ForwardResult {
    /// Convert to the JSON envelope clients see.
    ///
    /// Transport failures carry a fixed `status_code` of 500 since no
    /// upstream status exists, and never carry a `data` key.
    pub fn to_json(&self) -> Value {
        match self {
            ForwardResult::Completed { data, status_code } => json!({
                "success": true,
                "data": data,
                "status_code": status_code,
            }),
            ForwardResult::TransportError { error } => json!({
                "success": false,
                "error": error,
                "status_code": 500,
            }),
        }
    }
}

// Every proxied route answers 200 from the dashboard itself; the upstream
// status travels inside the envelope.
impl IntoResponse for ForwardResult {
    fn into_response(self) -> Response {
        Json(self.to_json()).into_response()
    }
}

/// One class the delete-all sweep failed to remove.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassDeleteError {
    pub class: String,
    pub error: String,
}

/// Summary of a completed delete-all sweep over the schema.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BulkDeleteReport {
    pub success: bool,
    pub deleted_classes: Vec<String>,
    pub errors: Vec<ClassDeleteError>,
    pub total_deleted: usize,
    pub total_errors: usize,
}

impl BulkDeleteReport {
    /// Build the report from the sweep results. The totals and the overall
    /// flag are derived from the two lists and cannot drift from them.
    pub fn new(deleted_classes: Vec<String>, errors: Vec<ClassDeleteError>) -> Self {
        Self {
            success: errors.is_empty(),
            total_deleted: deleted_classes.len(),
            total_errors: errors.len(),
            deleted_classes,
            errors,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "success": self.success,
            "deleted_classes": self.deleted_classes,
            "errors": self.errors,
            "total_deleted": self.total_deleted,
            "total_errors": self.total_errors,
        })
    }
}

/// Result of the delete-all operation as a whole.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkDeleteOutcome {
    /// The initial schema fetch never reached Weaviate; carries that raw
    /// failure so clients see the same shape as any other transport error.
    UpstreamUnavailable(ForwardResult),
    /// The sweep ran to completion; per-class failures live in the report.
    Completed(BulkDeleteReport),
}

impl BulkDeleteOutcome {
    pub fn to_json(&self) -> Value {
        match self {
            BulkDeleteOutcome::UpstreamUnavailable(result) => result.to_json(),
            BulkDeleteOutcome::Completed(report) => report.to_json(),
        }
    }
}

impl IntoResponse for BulkDeleteOutcome {
    fn into_response(self) -> Response {
        Json(self.to_json()).into_response()
    }
}
