use thiserror::Error;

/// Errors from loading and validating the environment configuration.
///
/// These only surface at startup; the HTTP surface never returns them.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unsupported Weaviate protocol: {0:?} (expected \"http\" or \"https\")")]
    UnsupportedProtocol(String),

    #[error("Invalid Weaviate URL {url:?}: {source}")]
    InvalidUpstreamUrl {
        url: String,
        source: url::ParseError,
    },
}
