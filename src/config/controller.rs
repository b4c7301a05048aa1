//! # Controller Configuration
//!
//! Controller-level settings loaded from environment variables.

use crate::constants::{
    DEFAULT_CONTROLLER_NAMESPACE, DEFAULT_LOG_LEVEL, DEFAULT_PROVIDER_NAMESPACE,
};
use crate::controller::provider::ProviderLookupPolicy;
use std::str::FromStr;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            other => Err(format!("unknown log format '{other}', expected json or text")),
        }
    }
}

/// Controller-level configuration
///
/// All settings have sensible defaults and can be overridden via environment variables.
/// Environment variables are populated from a ConfigMap using `envFrom` in the deployment.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller namespace
    /// Namespace where the controller is deployed; in-cluster backends store state here
    pub controller_namespace: String,
    /// Namespace Provider resources are resolved in
    pub provider_namespace: String,
    /// Whether unreferenced Configurations look up the default Provider
    pub provider_lookup_policy: ProviderLookupPolicy,
    /// Global log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: LogFormat,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            controller_namespace: DEFAULT_CONTROLLER_NAMESPACE.to_string(),
            provider_namespace: DEFAULT_PROVIDER_NAMESPACE.to_string(),
            provider_lookup_policy: ProviderLookupPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl ControllerConfig {
    /// Load configuration from environment variables with defaults
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            controller_namespace: lookup("POD_NAMESPACE")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.controller_namespace),
            provider_namespace: lookup("PROVIDER_NAMESPACE")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.provider_namespace),
            provider_lookup_policy: parse_or_default(
                lookup("PROVIDER_LOOKUP_POLICY"),
                defaults.provider_lookup_policy,
            ),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: parse_or_default(lookup("LOG_FORMAT"), defaults.log_format),
        }
    }
}

/// Parse an optional value or fall back to the default
fn parse_or_default<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}
