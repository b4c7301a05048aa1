//! # In-Memory Provider Store
//!
//! Serves Provider lookups from a fixed set of records. Used by the offline
//! CLI mode and by tests.

use super::{ProviderStore, ProviderStoreError};
use crate::crd::Provider;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct InMemoryProviderStore {
    providers: HashMap<String, Provider>,
    lookups: AtomicUsize,
}

fn store_key(namespace: &str, name: &str) -> String {
    format!("{namespace}/{name}")
}

impl InMemoryProviderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a Provider under `namespace`, overriding the namespace in its metadata
    ///
    /// # Errors
    ///
    /// Returns [`ProviderStoreError::MissingName`] if the Provider has no `metadata.name`.
    pub fn with_provider(
        mut self,
        namespace: &str,
        provider: Provider,
    ) -> Result<Self, ProviderStoreError> {
        self.insert(namespace, provider)?;
        Ok(self)
    }

    /// Add a Provider under `namespace`, overriding the namespace in its metadata
    ///
    /// # Errors
    ///
    /// Returns [`ProviderStoreError::MissingName`] if the Provider has no `metadata.name`.
    pub fn insert(
        &mut self,
        namespace: &str,
        mut provider: Provider,
    ) -> Result<(), ProviderStoreError> {
        let name = match provider.metadata.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(ProviderStoreError::MissingName {
                    namespace: namespace.to_string(),
                });
            }
        };
        provider.metadata.namespace = Some(namespace.to_string());
        self.providers.insert(store_key(namespace, &name), provider);
        Ok(())
    }

    /// Number of lookups served so far, successful or not
    #[must_use]
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProviderStore for InMemoryProviderStore {
    async fn get(&self, name: &str, namespace: &str) -> Result<Provider, ProviderStoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.providers
            .get(&store_key(namespace, name))
            .cloned()
            .ok_or_else(|| ProviderStoreError::NotFound {
                name: name.to_string(),
                namespace: namespace.to_string(),
            })
    }
}
