//! Provider error types

/// Errors that can occur while fetching records
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Snapshot file could not be read
    #[error("failed to read snapshot '{path}': {source}")]
    Io {
        /// File path
        path: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not valid JSON for the expected shape
    #[error("failed to parse snapshot '{path}': {source}")]
    Parse {
        /// File path
        path: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
