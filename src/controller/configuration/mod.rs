//! # Configuration Validation
//!
//! Classifies a submitted [`Configuration`] and materializes it into the text
//! handed to the execution engine.
//!
//! ## Flow
//!
//! 1. Exactly one of `spec.json` / `spec.hcl` must be set
//! 2. A data-only (`json`) body is returned verbatim
//! 3. A module (`hcl`) body is joined with its rendered backend and any provider overlay:
//!    - Provider lookup ([`lookup_provider`]) according to the [`ProviderLookupPolicy`]
//!    - Backend resolution ([`resolve_backend`])
//!    - Backend rendering ([`BackendRenderer`])
//!    - Overlay selection ([`provider_overlay`])
//!
//! The resolved backend is returned alongside the text; the Configuration
//! passed in is never modified.

mod backend;
mod error;

pub use backend::resolve_backend;
pub use error::ConfigurationError;

use crate::config::ControllerConfig;
use crate::controller::overlay::provider_overlay;
use crate::controller::provider::{lookup_provider, ProviderLookupPolicy, ProviderStore};
use crate::controller::render::BackendRenderer;
use crate::crd::{Backend, Configuration, Provider};
use crate::observability::metrics;
use kube::ResourceExt;
use std::sync::Arc;

/// Kind of a validated Configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationKind {
    /// Data-only body, passed through verbatim
    DataOnly,
    /// Module body rendered with a backend
    Module,
}

impl ConfigurationKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigurationKind::DataOnly => "JSON",
            ConfigurationKind::Module => "HCL",
        }
    }
}

/// Result of validating a Configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfiguration {
    pub kind: ConfigurationKind,
    /// Text consumed by the execution engine
    pub rendered: String,
    /// Backend the module was rendered with; `None` for data-only Configurations.
    /// Callers persist it back onto the resource if they need it.
    pub backend: Option<Backend>,
}

/// Validates Configurations against a Provider store
#[derive(Clone)]
pub struct ConfigurationValidator {
    store: Arc<dyn ProviderStore>,
    renderer: Arc<dyn BackendRenderer>,
    provider_namespace: String,
    controller_namespace: String,
    lookup_policy: ProviderLookupPolicy,
}

impl std::fmt::Debug for ConfigurationValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurationValidator")
            .field("provider_namespace", &self.provider_namespace)
            .field("controller_namespace", &self.controller_namespace)
            .field("lookup_policy", &self.lookup_policy)
            .finish_non_exhaustive()
    }
}

impl ConfigurationValidator {
    #[must_use]
    pub fn new(store: Arc<dyn ProviderStore>, renderer: Arc<dyn BackendRenderer>) -> Self {
        Self::from_config(store, renderer, &ControllerConfig::default())
    }

    /// Build a validator using the namespaces and lookup policy from `config`
    #[must_use]
    pub fn from_config(
        store: Arc<dyn ProviderStore>,
        renderer: Arc<dyn BackendRenderer>,
        config: &ControllerConfig,
    ) -> Self {
        Self {
            store,
            renderer,
            provider_namespace: config.provider_namespace.clone(),
            controller_namespace: config.controller_namespace.clone(),
            lookup_policy: config.provider_lookup_policy,
        }
    }

    #[must_use]
    pub fn with_provider_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.provider_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_controller_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.controller_namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_lookup_policy(mut self, policy: ProviderLookupPolicy) -> Self {
        self.lookup_policy = policy;
        self
    }

    /// Classify `configuration` and render its executable definition
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::AmbiguousConfiguration`] if neither body is set
    /// - [`ConfigurationError::ConflictingConfiguration`] if both bodies are set
    /// - [`ConfigurationError::ProviderNotFound`] if the Provider lookup fails
    /// - [`ConfigurationError::BackendRenderFailed`] if the backend cannot be rendered
    pub async fn validate(
        &self,
        configuration: &Configuration,
    ) -> Result<ValidatedConfiguration, ConfigurationError> {
        let result = self.classify(configuration).await;
        match &result {
            Ok(validated) => metrics::increment_validations(validated.kind.as_str()),
            Err(e) => metrics::increment_validation_errors(e.reason()),
        }
        result
    }

    async fn classify(
        &self,
        configuration: &Configuration,
    ) -> Result<ValidatedConfiguration, ConfigurationError> {
        let json = configuration.spec.json_body();
        let hcl = configuration.spec.hcl_body();

        match (json.is_empty(), hcl.is_empty()) {
            (true, true) => Err(ConfigurationError::AmbiguousConfiguration),
            (false, false) => Err(ConfigurationError::ConflictingConfiguration),
            (false, true) => Ok(ValidatedConfiguration {
                kind: ConfigurationKind::DataOnly,
                rendered: json.to_string(),
                backend: None,
            }),
            (true, false) => self.render_module(configuration, hcl).await,
        }
    }

    async fn render_module(
        &self,
        configuration: &Configuration,
        hcl: &str,
    ) -> Result<ValidatedConfiguration, ConfigurationError> {
        let provider = self.resolve_provider(configuration).await?;
        let provider_spec = provider.as_ref().map(|p| &p.spec);

        let backend = resolve_backend(
            provider_spec.and_then(|spec| spec.backend.as_ref()),
            configuration.spec.backend.as_ref(),
            &configuration.name_any(),
        );
        let backend_tf = self
            .renderer
            .render(&backend, &self.controller_namespace)
            .map_err(ConfigurationError::BackendRenderFailed)?;
        let overlay = provider_overlay(provider_spec.map(|spec| spec.kind()).unwrap_or_default());

        Ok(ValidatedConfiguration {
            kind: ConfigurationKind::Module,
            rendered: format!("{hcl}\n{backend_tf}\n{overlay}"),
            backend: Some(backend),
        })
    }

    async fn resolve_provider(
        &self,
        configuration: &Configuration,
    ) -> Result<Option<Provider>, ConfigurationError> {
        match self.lookup_policy.provider_name(&configuration.spec) {
            Some(name) => {
                lookup_provider(self.store.as_ref(), name, &self.provider_namespace)
                    .await
                    .map(Some)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::provider::InMemoryProviderStore;
    use crate::controller::render::TemplateBackendRenderer;
    use crate::crd::{ConfigurationSpec, ProviderReference, ProviderSpec};

    fn validator(store: InMemoryProviderStore) -> ConfigurationValidator {
        ConfigurationValidator::new(
            Arc::new(store),
            Arc::new(TemplateBackendRenderer::new().unwrap()),
        )
        .with_provider_namespace("default")
        .with_controller_namespace("provisioning-system")
    }

    fn generic_default_provider() -> InMemoryProviderStore {
        InMemoryProviderStore::new().with_provider(
            "default",
            Provider::new(
                "default",
                ProviderSpec {
                    provider: Some("generic".to_string()),
                    ..ProviderSpec::default()
                },
            ),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_hcl_without_provider_renders_in_cluster_backend() {
        let configuration = Configuration::new(
            "app",
            ConfigurationSpec {
                hcl: Some("module {}".to_string()),
                ..ConfigurationSpec::default()
            },
        );
        let validated = validator(generic_default_provider())
            .validate(&configuration)
            .await
            .unwrap();

        assert_eq!(validated.kind, ConfigurationKind::Module);
        let backend = validated.backend.unwrap();
        assert_eq!(backend.secret_suffix, "app");
        assert!(backend.in_cluster_config);
        assert!(validated.rendered.starts_with("module {}\nterraform {"));
        assert!(validated.rendered.ends_with("}\n"));
    }

    #[tokio::test]
    async fn test_referenced_only_policy_skips_lookup() {
        let store = Arc::new(InMemoryProviderStore::new());
        let validator = ConfigurationValidator::new(
            Arc::clone(&store) as Arc<dyn ProviderStore>,
            Arc::new(TemplateBackendRenderer::new().unwrap()),
        )
        .with_lookup_policy(ProviderLookupPolicy::ReferencedOnly);
        let configuration = Configuration::new(
            "app",
            ConfigurationSpec {
                hcl: Some("module {}".to_string()),
                ..ConfigurationSpec::default()
            },
        );

        let validated = validator.validate(&configuration).await.unwrap();
        assert_eq!(store.lookup_count(), 0);
        assert!(validated.backend.unwrap().in_cluster_config);
    }

    #[tokio::test]
    async fn test_referenced_only_policy_still_resolves_references() {
        let configuration = Configuration::new(
            "app",
            ConfigurationSpec {
                hcl: Some("module {}".to_string()),
                provider_ref: Some(ProviderReference {
                    name: "missing".to_string(),
                    namespace: None,
                }),
                ..ConfigurationSpec::default()
            },
        );
        let err = validator(InMemoryProviderStore::new())
            .with_lookup_policy(ProviderLookupPolicy::ReferencedOnly)
            .validate(&configuration)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "ProviderNotFound");
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ConfigurationKind::DataOnly.as_str(), "JSON");
        assert_eq!(ConfigurationKind::Module.as_str(), "HCL");
    }
}
