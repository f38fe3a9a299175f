//! Gallery error types
use thiserror::Error;

/// Errors that can occur while obtaining the item list
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Network(String),
    /// Server answered with a non-success status
    #[error("Server returned status {0}")]
    Status(u16),
    /// Fetched body is not a JSON array
    #[error("Parse error: {0}")]
    Parse(String),
    /// Inline data block is present but unusable
    #[error("Malformed inline gallery data: {0}")]
    MalformedInline(String),
}

impl LoadError {
    pub fn network(e: impl std::fmt::Display) -> Self {
        Self::Network(e.to_string())
    }
    pub fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Configuration error: {0}")]
    Invalid(String),
}
