//! # Provider Spec
//!
//! Named record supplying backend defaults and a provider-kind tag.

use crate::crd::ProviderBackend;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provider Custom Resource Definition
///
/// # Example
///
/// ```yaml
/// apiVersion: provisioning.octopilot.io/v1beta1
/// kind: Provider
/// metadata:
///   name: default
///   namespace: default
/// spec:
///   provider: localstack
///   region: us-east-1
///   backend:
///     type: s3
///     bucket: terraform-state
///     region: us-east-1
/// ```
#[derive(kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Provider",
    group = "provisioning.octopilot.io",
    version = "v1beta1",
    namespaced,
    printcolumn = r#"{"name":"Provider", "type":"string", "jsonPath":".spec.provider"}, {"name":"Region", "type":"string", "jsonPath":".spec.region"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSpec {
    /// Provider-kind tag (e.g., "aws", "localstack")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Default cloud region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Backend template applied to every Configuration using this provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<ProviderBackend>,
}

impl ProviderSpec {
    #[must_use]
    pub fn kind(&self) -> &str {
        self.provider.as_deref().unwrap_or_default()
    }
}
