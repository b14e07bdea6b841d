//! Warden - backup dashboard tables from the command line
//!
//! # Usage
//!
//! ```bash
//! # First page of enabled customers
//! warden customers
//!
//! # Large tenants, biggest first, with a status breakdown
//! warden customers --where "localStorageGB>5000" --sort localStorageGB --desc --group-by enabled
//!
//! # Critical alerts from the last week as JSON
//! warden alerts --where severity=Critical --range 7d --format json
//!
//! # Usage rows from a snapshot file
//! warden --config warden.toml usage --summarize storageGB
//! ```

mod cmd;
mod output;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use warden_config::{Config, LogConfig, LogFormat, LogLevel, LogOutput};

use crate::cmd::{Collection, QueryArgs};

/// Config files tried when --config is not given
const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/warden.toml", "warden.toml"];

/// Warden - backup dashboard tables from the command line
#[derive(Parser, Debug)]
#[command(name = "warden")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Customer tenants
    Customers(QueryArgs),

    /// Protection alerts
    Alerts(QueryArgs),

    /// Per-service storage usage
    Usage(QueryArgs),

    /// Alert email audit log
    Emails(QueryArgs),
}

impl Command {
    fn into_parts(self) -> (Collection, QueryArgs) {
        match self {
            Self::Customers(args) => (Collection::Customers, args),
            Self::Alerts(args) => (Collection::Alerts, args),
            Self::Usage(args) => (Collection::Usage, args),
            Self::Emails(args) => (Collection::Emails, args),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = resolve_log_level(cli.log_level, &config);
    init_logging(log_level, &config.log)?;

    let provider =
        warden_provider::from_config(&config.provider).context("failed to create data provider")?;
    debug!(provider = provider.name(), "provider ready");

    let (collection, args) = cli.command.into_parts();
    cmd::run(provider.as_ref(), collection, args, &config.pipeline).await
}

/// Load the config file, falling back to defaults when none exists
fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Config::from_file(path)
            .with_context(|| format!("failed to load config: {}", path.display()));
    }

    for candidate in DEFAULT_CONFIG_PATHS {
        let path = Path::new(candidate);
        if path.exists() {
            return Config::from_file(path)
                .with_context(|| format!("failed to load config: {}", path.display()));
        }
    }

    Ok(Config::default())
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<LogLevel>, config: &Config) -> LogLevel {
    cli_level.unwrap_or(config.log.level)
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: LogLevel, log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(level.as_str())
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let (writer, ansi) = match &log.output {
        LogOutput::Stdout => (BoxMakeWriter::new(std::io::stdout), true),
        LogOutput::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file: {}", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_ansi(ansi)
        .with_writer(writer);

    let registry = tracing_subscriber::registry().with(filter);
    match log.format {
        LogFormat::Console => registry.with(layer).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }

    Ok(())
}
