use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::WeaviateConfig;
use crate::weaviate::types::{ForwardResult, Method};

/// Thin client over the Weaviate REST API.
///
/// One instance is built at startup and shared for the process lifetime;
/// reqwest pools connections internally.
#[derive(Debug, Clone)]
pub struct WeaviateClient {
    http: Client,
    base_url: String,
    health_timeout: Duration,
}

impl WeaviateClient {
    pub fn new(config: &WeaviateConfig, health_timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            base_url: config.url(),
            health_timeout,
        }
    }

    /// Base URL of the upstream instance, without the `/v1` suffix.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint onto the versioned API root. The endpoint may carry
    /// its own query string.
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/v1/{}", self.base_url, endpoint)
    }

    /// Forward one request to the Weaviate v1 API.
    ///
    /// Runs without a timeout so slow upstream answers pass through intact.
    /// Only POST carries a body; `body` is ignored for the other methods.
    pub async fn forward(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> ForwardResult {
        let url = self.api_url(endpoint);
        tracing::debug!("Forwarding {:?} to {}", method, url);

        let request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => match body {
                Some(body) => self.http.post(&url).json(body),
                None => self.http.post(&url),
            },
            Method::Delete => self.http.delete(&url),
        };

        match request.send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                // Empty and unparseable bodies both flatten to {} so the
                // envelope always carries a data object.
                let data = response.json::<Value>().await.unwrap_or_else(|_| json!({}));
                ForwardResult::Completed { data, status_code }
            }
            Err(e) => {
                tracing::warn!("Request to {} failed: {}", url, e);
                ForwardResult::TransportError {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Probe upstream availability with a bounded GET of `/v1/meta`.
    ///
    /// Unlike `forward` this applies the configured timeout, and collapses
    /// every failure mode to `None`.
    pub async fn ping(&self) -> Option<u16> {
        let url = self.api_url("meta");
        match self.http.get(&url).timeout(self.health_timeout).send().await {
            Ok(response) => Some(response.status().as_u16()),
            Err(_) => None,
        }
    }
}
