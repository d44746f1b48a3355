//! Error types for wikicite.
//!
//! The extraction and rendering pipeline itself has no fatal error paths:
//! missing metadata degrades to absent fields. These errors cover the JSON
//! surfaces used by external collaborators (the settings store and the
//! presentation layer).

/// Error type for citation operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Options JSON from the settings store could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Metadata or citation could not be serialized to JSON.
    #[error("Serialization failed: {0}")]
    SerializationError(String),
}

/// Result type alias for citation operations.
pub type Result<T> = std::result::Result<T, Error>;
