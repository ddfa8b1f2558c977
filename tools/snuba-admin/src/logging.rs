//! Log output setup.
//!
//! The terminal UI owns stdout, so in TUI mode logs only go to a file. The
//! one-shot subcommands log to stderr.

use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AdminConfig;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Interactive console: file only, nothing when no file is configured.
    Tui,
    /// Subcommands: file if configured, stderr otherwise.
    Cli,
}

/// Errors while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter {filter:?}: {reason}")]
    Filter { filter: String, reason: String },
    #[error("cannot open log file: {0}")]
    File(#[from] io::Error),
    #[error("failed to install subscriber: {0}")]
    Init(String),
}

fn build_filter(config: &AdminConfig) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| LoggingError::Filter {
        filter: config.log_level.clone(),
        reason: e.to_string(),
    })
}

fn open_log_file(config: &AdminConfig) -> Result<Option<File>, LoggingError> {
    match &config.log_file {
        Some(path) => Ok(Some(OpenOptions::new().create(true).append(true).open(path)?)),
        None => Ok(None),
    }
}

/// Install the global subscriber. Returns `false` when logging stays disabled.
pub fn init_logging(config: &AdminConfig, target: LogTarget) -> Result<bool, LoggingError> {
    let filter = build_filter(config)?;

    match (open_log_file(config)?, target) {
        (Some(file), _) => {
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        (None, LogTarget::Cli) => {
            let layer = fmt::layer().with_target(false).with_writer(io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init()
                .map_err(|e| LoggingError::Init(e.to_string()))?;
        }
        (None, LogTarget::Tui) => return Ok(false),
    }

    tracing::debug!(base_url = %config.base_url, "logging initialized");
    Ok(true)
}
