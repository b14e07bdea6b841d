//! Warden Provider - record sources for the dashboard
//!
//! A provider hands out complete, already-materialized collections. There is
//! no streaming and no incremental loading; every fetch is a fresh snapshot.
//!
//! - **Memory**: built-in sample data, optionally with artificial latency
//! - **JSON file**: a snapshot file re-read on every fetch
//!
//! # Usage
//!
//! ```ignore
//! use warden_provider::{DataProvider, MemoryProvider};
//!
//! let provider = MemoryProvider::sample();
//! let customers = provider.fetch_customers().await?;
//! ```

pub mod error;
pub mod file;
pub mod memory;
pub mod sample;

pub use error::{ProviderError, Result};
pub use file::JsonFileProvider;
pub use memory::MemoryProvider;

use std::time::Duration;

use async_trait::async_trait;
use warden_config::{ProviderConfig, ProviderType};
use warden_records::{AlertEmailRecord, AlertRecord, CustomerRecord, UsageDetailRecord};

/// Source of dashboard records
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// All customers
    async fn fetch_customers(&self) -> Result<Vec<CustomerRecord>>;

    /// All alerts
    async fn fetch_alerts(&self) -> Result<Vec<AlertRecord>>;

    /// All usage detail rows
    async fn fetch_usage_details(&self) -> Result<Vec<UsageDetailRecord>>;

    /// Alert email audit log
    async fn fetch_alert_emails(&self) -> Result<Vec<AlertEmailRecord>>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Create a provider from configuration
///
/// # Errors
///
/// Returns `ProviderError::Config` if a json provider has no path.
pub fn from_config(config: &ProviderConfig) -> Result<Box<dyn DataProvider>> {
    match config.provider_type {
        ProviderType::Memory => {
            let provider = MemoryProvider::sample()
                .with_latency(Duration::from_millis(config.latency_ms));
            Ok(Box::new(provider))
        }
        ProviderType::Json => {
            let path = config.path.as_ref().ok_or_else(|| {
                ProviderError::Config("path required for json provider".to_string())
            })?;
            Ok(Box::new(JsonFileProvider::new(path)))
        }
    }
}
