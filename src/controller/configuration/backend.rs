//! # Backend Resolution
//!
//! Merges the Provider's backend template, the Configuration's own backend and
//! the in-cluster default into the one backend a Configuration is rendered with.

use crate::crd::{Backend, ProviderBackend};

/// Resolve the backend for the Configuration named `configuration_name`
///
/// Precedence, first match wins:
/// 1. The Provider's backend template, keyed by the Configuration name. Any
///    backend authored on the Configuration is discarded.
/// 2. The Configuration's own backend, forced in-cluster, with the secret
///    suffix defaulted to the Configuration name.
/// 3. A fresh in-cluster backend whose secret suffix is the Configuration name.
#[must_use]
pub fn resolve_backend(
    provider_backend: Option<&ProviderBackend>,
    configured: Option<&Backend>,
    configuration_name: &str,
) -> Backend {
    if let Some(template) = provider_backend {
        return Backend {
            backend_type: template.backend_type.clone(),
            bucket: template.bucket.clone(),
            region: template.region.clone(),
            key: configuration_name.to_string(),
            in_cluster_config: false,
            ..Backend::default()
        };
    }

    if let Some(configured) = configured {
        let mut backend = configured.clone();
        if backend.secret_suffix.is_empty() {
            backend.secret_suffix = configuration_name.to_string();
        }
        backend.in_cluster_config = true;
        return backend;
    }

    Backend {
        secret_suffix: configuration_name.to_string(),
        in_cluster_config: true,
        ..Backend::default()
    }
}
