//! # Configuration Spec
//!
//! The infrastructure definition a user submits to the controller.

use crate::crd::Backend;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration Custom Resource Definition
///
/// Carries exactly one payload: a data-only `json` body or an `hcl` module body.
///
/// # Example
///
/// ```yaml
/// apiVersion: provisioning.octopilot.io/v1beta1
/// kind: Configuration
/// metadata:
///   name: state-bucket
///   namespace: default
/// spec:
///   hcl: |
///     resource "aws_s3_bucket" "bucket" {
///       bucket = "my-bucket"
///     }
///   providerRef:
///     name: aws
/// ```
#[derive(kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    kind = "Configuration",
    group = "provisioning.octopilot.io",
    version = "v1beta1",
    namespaced,
    shortname = "conf"
)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationSpec {
    /// Data-only configuration body, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
    /// Module configuration body, rendered together with its backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hcl: Option<String>,
    /// Provider to resolve backend defaults from
    /// If not specified, the provider named "default" is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_ref: Option<ProviderReference>,
    /// User-authored backend; ignored when the Provider supplies one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<Backend>,
}

/// Reference to a Provider resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderReference {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl ConfigurationSpec {
    /// Data-only body, empty when unset
    #[must_use]
    pub fn json_body(&self) -> &str {
        self.json.as_deref().unwrap_or_default()
    }

    /// Module body, empty when unset
    #[must_use]
    pub fn hcl_body(&self) -> &str {
        self.hcl.as_deref().unwrap_or_default()
    }

    /// Name of the referenced provider, if one is referenced by a non-empty name
    #[must_use]
    pub fn provider_name(&self) -> Option<&str> {
        self.provider_ref
            .as_ref()
            .map(|r| r.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_deserializes_from_manifest() {
        let config: Configuration = serde_yaml::from_str(
            r#"
apiVersion: provisioning.octopilot.io/v1beta1
kind: Configuration
metadata:
  name: bucket
  namespace: default
spec:
  hcl: 'resource "null_resource" "a" {}'
  providerRef:
    name: aws
  backend:
    secretSuffix: custom
"#,
        )
        .unwrap();

        assert_eq!(config.metadata.name.as_deref(), Some("bucket"));
        assert_eq!(config.spec.json_body(), "");
        assert_eq!(config.spec.hcl_body(), r#"resource "null_resource" "a" {}"#);
        assert_eq!(config.spec.provider_name(), Some("aws"));
        assert_eq!(config.spec.backend.unwrap().secret_suffix, "custom");
    }

    #[test]
    fn test_empty_provider_reference_counts_as_unset() {
        let spec = ConfigurationSpec {
            provider_ref: Some(ProviderReference::default()),
            ..ConfigurationSpec::default()
        };
        assert_eq!(spec.provider_name(), None);
    }
}
