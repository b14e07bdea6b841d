//! Warden Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! An empty file is a valid config: sample data, info logging, 10 rows per page.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use warden_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[pipeline]\npage_size = 25").unwrap();
//! assert_eq!(config.pipeline.page_size, 25);
//! ```
//!
//! # Example Config
//!
//! ```toml
//! [log]
//! level = "debug"
//! format = "json"
//!
//! [provider]
//! type = "json"
//! path = "data/snapshot.json"
//!
//! [pipeline]
//! page_size = 20
//! show_disabled = false
//! ```

mod error;
mod logging;
mod pipeline;
mod provider;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use error::{ConfigError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};
pub use pipeline::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PipelineConfig};
pub use provider::{ProviderConfig, ProviderType};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Where records come from
    pub provider: ProviderConfig,

    /// Query defaults for the dashboard tables
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read, contains invalid TOML or fails
    /// validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::str::FromStr;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.provider.provider_type, ProviderType::Memory);
        assert_eq!(config.pipeline.page_size, DEFAULT_PAGE_SIZE);
        assert!(!config.pipeline.show_disabled);
    }

    #[test]
    fn test_full_config_parse() {
        let toml = r#"
[log]
level = "debug"
format = "json"
output = "stderr"

[provider]
type = "json"
path = "data/snapshot.json"

[pipeline]
page_size = 25
show_disabled = true
"#;
        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.provider.provider_type, ProviderType::Json);
        assert_eq!(
            config.provider.path.as_deref(),
            Some(Path::new("data/snapshot.json"))
        );
        assert_eq!(config.pipeline.page_size, 25);
        assert!(config.pipeline.show_disabled);
    }

    #[test]
    fn test_invalid_toml() {
        let result = Config::from_str("invalid { toml");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unknown_provider_type() {
        let result = Config::from_str("[provider]\ntype = \"postgres\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pipeline]\npage_size = 50").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.pipeline.page_size, 50);
    }

    #[test]
    fn test_from_missing_file() {
        let result = Config::from_file("/nonexistent/warden.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
