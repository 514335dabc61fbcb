pub mod client;
pub mod types;

pub use client::WeaviateClient;
pub use types::{BulkDeleteOutcome, BulkDeleteReport, ClassDeleteError, ForwardResult, Method};
