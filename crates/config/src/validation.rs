//! Configuration validation
//!
//! - `json` provider has a path
//! - page size is within `1..=MAX_PAGE_SIZE`
//! - file log output has a non-empty path

use crate::Config;
use crate::error::{ConfigError, Result};
use crate::logging::LogOutput;
use crate::pipeline::MAX_PAGE_SIZE;
use crate::provider::ProviderType;

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_provider(config)?;
    validate_pipeline(config)?;
    validate_log(config)?;
    Ok(())
}

fn validate_provider(config: &Config) -> Result<()> {
    if config.provider.provider_type == ProviderType::Json && config.provider.path.is_none() {
        return Err(ConfigError::missing_field("provider", "path"));
    }
    Ok(())
}

fn validate_pipeline(config: &Config) -> Result<()> {
    let size = config.pipeline.page_size;
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ConfigError::invalid_value(
            "pipeline",
            "page_size",
            format!("{} (must be 1..={})", size, MAX_PAGE_SIZE),
        ));
    }
    Ok(())
}

fn validate_log(config: &Config) -> Result<()> {
    if let LogOutput::File(ref path) = config.log.output
        && path.trim().is_empty()
    {
        return Err(ConfigError::invalid_value("log", "output", "empty file path"));
    }
    Ok(())
}
