//! # Kubernetes Provider Store
//!
//! Serves Provider lookups from the Kubernetes API.

use super::{ProviderStore, ProviderStoreError};
use crate::crd::Provider;
use async_trait::async_trait;
use kube::{Api, Client};

#[derive(Clone)]
pub struct KubeProviderStore {
    client: Client,
}

impl std::fmt::Debug for KubeProviderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeProviderStore").finish_non_exhaustive()
    }
}

impl KubeProviderStore {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProviderStore for KubeProviderStore {
    async fn get(&self, name: &str, namespace: &str) -> Result<Provider, ProviderStoreError> {
        let api: Api<Provider> = Api::namespaced(self.client.clone(), namespace);
        match api.get(name).await {
            Ok(provider) => Ok(provider),
            Err(kube::Error::Api(api_err)) if api_err.code == 404 => {
                Err(ProviderStoreError::NotFound {
                    name: name.to_string(),
                    namespace: namespace.to_string(),
                })
            }
            Err(e) => Err(ProviderStoreError::Api(e)),
        }
    }
}
