//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or saving a machine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),
}
