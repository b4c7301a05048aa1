//! # Logging
//!
//! Installs the global `tracing` subscriber.
//!
//! Logs go to stderr so that anything a binary prints on stdout stays clean.
//! `RUST_LOG` takes precedence; otherwise the configured log level is applied
//! to this crate and its binaries only.

use crate::config::{ControllerConfig, LogFormat};
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Log targets the configured level applies to when `RUST_LOG` is unset
const LOG_TARGETS: &[&str] = &["configuration_controller", "confctl", "crdgen"];

/// Filter directives applying `log_level` to every crate target
#[must_use]
pub fn default_directives(log_level: &str) -> String {
    let level = log_level.trim().to_lowercase();
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the env filter from `RUST_LOG`, falling back to [`default_directives`]
#[must_use]
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directives(log_level).into())
}

/// Initialize the tracing subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(config: &ControllerConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(&config.log_level));

    match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    }
    .map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))
}
