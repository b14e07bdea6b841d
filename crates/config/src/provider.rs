//! Data provider configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Provider type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// Built-in sample data
    #[default]
    Memory,
    /// JSON snapshot file
    Json,
}

impl ProviderType {
    /// Name for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Json => "json",
        }
    }
}

/// Provider configuration
///
/// # Example
///
/// ```toml
/// [provider]
/// type = "json"
/// path = "data/snapshot.json"
/// latency_ms = 0
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Provider type (memory, json)
    /// Default: memory
    #[serde(rename = "type")]
    pub provider_type: ProviderType,

    /// Snapshot file (required for json)
    pub path: Option<PathBuf>,

    /// Artificial latency per fetch in milliseconds (memory only)
    /// Default: 0
    pub latency_ms: u64,
}
