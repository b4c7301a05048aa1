//! # Provider Lookup
//!
//! Resolves the Provider a Configuration refers to.
//!
//! The object store is abstracted behind [`ProviderStore`] so lookups can be
//! served by the Kubernetes API ([`KubeProviderStore`]) or from memory
//! ([`InMemoryProviderStore`]). A single lookup is attempted per call; retry
//! policy belongs to the caller's reconcile loop.

mod kubernetes;
mod memory;

pub use kubernetes::KubeProviderStore;
pub use memory::InMemoryProviderStore;

use crate::constants::DEFAULT_PROVIDER_NAME;
use crate::controller::configuration::ConfigurationError;
use crate::crd::{ConfigurationSpec, Provider};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ProviderStoreError {
    #[error("Provider {namespace}/{name} not found")]
    NotFound { name: String, namespace: String },
    #[error("Provider in namespace {namespace} has no metadata.name")]
    MissingName { namespace: String },
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),
}

/// Read access to Provider records
#[async_trait]
pub trait ProviderStore: Send + Sync {
    /// Fetch a Provider by name and namespace
    async fn get(&self, name: &str, namespace: &str) -> Result<Provider, ProviderStoreError>;
}

/// Whether a Configuration without a provider reference looks up the default Provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProviderLookupPolicy {
    /// Unreferenced Configurations resolve the Provider named "default", which must exist
    #[default]
    Always,
    /// Unreferenced Configurations are treated as having no Provider
    ReferencedOnly,
}

impl ProviderLookupPolicy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderLookupPolicy::Always => "always",
            ProviderLookupPolicy::ReferencedOnly => "referenced-only",
        }
    }

    /// Name of the Provider to look up, or `None` when the lookup is skipped
    #[must_use]
    pub fn provider_name<'a>(&self, spec: &'a ConfigurationSpec) -> Option<&'a str> {
        match (spec.provider_name(), self) {
            (Some(name), _) => Some(name),
            (None, ProviderLookupPolicy::Always) => Some(DEFAULT_PROVIDER_NAME),
            (None, ProviderLookupPolicy::ReferencedOnly) => None,
        }
    }
}

impl fmt::Display for ProviderLookupPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderLookupPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "referenced-only" | "referencedonly" => Ok(Self::ReferencedOnly),
            other => Err(format!(
                "unknown provider lookup policy '{other}', expected always or referenced-only"
            )),
        }
    }
}

/// Fetch a Provider, wrapping any store failure as `ProviderNotFound`
///
/// # Errors
///
/// Returns [`ConfigurationError::ProviderNotFound`] if the store lookup fails for any reason.
pub async fn lookup_provider(
    store: &dyn ProviderStore,
    name: &str,
    namespace: &str,
) -> Result<Provider, ConfigurationError> {
    store.get(name, namespace).await.map_err(|source| {
        error!(
            provider = name,
            namespace = namespace,
            error = %source,
            "Failed to get Provider object"
        );
        ConfigurationError::ProviderNotFound {
            name: name.to_string(),
            namespace: namespace.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{ProviderReference, ProviderSpec};

    #[test]
    fn test_policy_always_falls_back_to_default_provider() {
        let spec = ConfigurationSpec::default();
        assert_eq!(
            ProviderLookupPolicy::Always.provider_name(&spec),
            Some(DEFAULT_PROVIDER_NAME)
        );
        assert_eq!(ProviderLookupPolicy::ReferencedOnly.provider_name(&spec), None);
    }

    #[test]
    fn test_policy_uses_referenced_name() {
        let spec = ConfigurationSpec {
            provider_ref: Some(ProviderReference {
                name: "aws".to_string(),
                namespace: None,
            }),
            ..ConfigurationSpec::default()
        };
        for policy in [ProviderLookupPolicy::Always, ProviderLookupPolicy::ReferencedOnly] {
            assert_eq!(policy.provider_name(&spec), Some("aws"));
        }
    }

    #[test]
    fn test_policy_parse_round_trip() {
        for policy in [ProviderLookupPolicy::Always, ProviderLookupPolicy::ReferencedOnly] {
            assert_eq!(policy.as_str().parse::<ProviderLookupPolicy>(), Ok(policy));
        }
        assert!("never".parse::<ProviderLookupPolicy>().is_err());
    }

    #[tokio::test]
    async fn test_lookup_provider_wraps_not_found() {
        let store = InMemoryProviderStore::new();
        let err = lookup_provider(&store, "missing", "default")
            .await
            .unwrap_err();
        match err {
            ConfigurationError::ProviderNotFound {
                name,
                namespace,
                source: ProviderStoreError::NotFound { .. },
            } => {
                assert_eq!(name, "missing");
                assert_eq!(namespace, "default");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lookup_provider_returns_stored_record() {
        let store = InMemoryProviderStore::new().with_provider(
            "default",
            Provider::new(
                "aws",
                ProviderSpec {
                    provider: Some("aws".to_string()),
                    ..ProviderSpec::default()
                },
            ),
        )
        .unwrap();
        let provider = lookup_provider(&store, "aws", "default").await.unwrap();
        assert_eq!(provider.spec.kind(), "aws");
        assert_eq!(store.lookup_count(), 1);
    }
}
