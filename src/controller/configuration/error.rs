//! # Configuration Errors

use crate::controller::provider::ProviderStoreError;
use crate::controller::render::RenderError;
use thiserror::Error;

/// Failure to turn a Configuration into an executable definition
///
/// Every variant is terminal for the current invocation; the caller decides
/// whether to requeue.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("spec.json or spec.hcl should be set")]
    AmbiguousConfiguration,
    #[error("spec.json and spec.hcl could not be set at the same time")]
    ConflictingConfiguration,
    #[error("failed to get Provider object {namespace}/{name}")]
    ProviderNotFound {
        name: String,
        namespace: String,
        #[source]
        source: ProviderStoreError,
    },
    #[error("failed to prepare backend configuration")]
    BackendRenderFailed(#[source] RenderError),
}

impl ConfigurationError {
    /// Stable short label for logs and metrics
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            ConfigurationError::AmbiguousConfiguration => "AmbiguousConfiguration",
            ConfigurationError::ConflictingConfiguration => "ConflictingConfiguration",
            ConfigurationError::ProviderNotFound { .. } => "ProviderNotFound",
            ConfigurationError::BackendRenderFailed(_) => "BackendRenderFailed",
        }
    }
}
