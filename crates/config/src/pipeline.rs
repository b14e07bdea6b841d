//! Query pipeline defaults

use serde::Deserialize;

/// Default rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 10_000;

/// Defaults applied when the caller doesn't specify them
///
/// # Example
///
/// ```toml
/// [pipeline]
/// page_size = 10
/// show_disabled = false
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Rows per page
    /// Default: 10
    pub page_size: usize,

    /// Show disabled customers and inactive services
    /// Default: false
    pub show_disabled: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            show_disabled: false,
        }
    }
}
