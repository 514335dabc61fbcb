use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Full dashboard configuration, loaded once at startup and passed down
/// through application state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub weaviate: WeaviateConfig,
    pub server: ServerConfig,
    pub api: ApiConfig,
}

/// Where the Weaviate instance lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaviateConfig {
    pub host: String,
    pub port: u16,
    pub protocol: String,
}

/// Where the dashboard itself listens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

/// Limits and timeouts for the proxied API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub default_object_limit: i64,
    pub max_objects_per_request: i64,
    pub health_timeout_secs: u64,
}

impl WeaviateConfig {
    /// Base URL of the upstream instance, e.g. `http://localhost:8080`.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ApiConfig {
    pub fn health_timeout(&self) -> Duration {
        Duration::from_secs(self.health_timeout_secs)
    }
}

impl AppConfig {
    /// Load defaults, apply env overrides, then validate the result.
    ///
    /// A value that is present but unparseable is an error, not a silent
    /// fallback to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::defaults().with_env_overrides()?.validate()
    }

    fn defaults() -> Self {
        Self {
            weaviate: WeaviateConfig {
                host: "localhost".to_string(),
                port: 8080,
                protocol: "http".to_string(),
            },
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 5000,
                debug: true,
            },
            api: ApiConfig {
                default_object_limit: 10,
                max_objects_per_request: 100,
                health_timeout_secs: 5,
            },
        }
    }

    fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Weaviate overrides
        if let Ok(v) = env::var("WEAVIATE_HOST") {
            self.weaviate.host = v;
        }
        if let Ok(v) = env::var("WEAVIATE_PORT") {
            self.weaviate.port = parse_env("WEAVIATE_PORT", &v)?;
        }
        if let Ok(v) = env::var("WEAVIATE_PROTOCOL") {
            self.weaviate.protocol = v;
        }

        // Server overrides
        if let Ok(v) = env::var("HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("PORT") {
            self.server.port = parse_env("PORT", &v)?;
        }
        if let Ok(v) = env::var("DEBUG") {
            self.server.debug = parse_env("DEBUG", &v)?;
        }

        // API overrides
        if let Ok(v) = env::var("DEFAULT_OBJECT_LIMIT") {
            self.api.default_object_limit = parse_env("DEFAULT_OBJECT_LIMIT", &v)?;
        }
        if let Ok(v) = env::var("MAX_OBJECTS_PER_REQUEST") {
            self.api.max_objects_per_request = parse_env("MAX_OBJECTS_PER_REQUEST", &v)?;
        }
        if let Ok(v) = env::var("HEALTH_TIMEOUT_SECS") {
            self.api.health_timeout_secs = parse_env("HEALTH_TIMEOUT_SECS", &v)?;
        }

        Ok(self)
    }

    fn validate(self) -> Result<Self, ConfigError> {
        match self.weaviate.protocol.as_str() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedProtocol(other.to_string())),
        }

        let url = self.weaviate.url();
        url::Url::parse(&url).map_err(|source| ConfigError::InvalidUpstreamUrl { url, source })?;

        Ok(self)
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}
