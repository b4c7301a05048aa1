//! # Backend Descriptor
//!
//! Remote-state storage parameters for a Configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Resolved remote-state backend for a Configuration
///
/// Exactly one of two shapes is meaningful:
/// - external storage: `backend_type`, `bucket`, `region` and `key` set, `in_cluster_config` false
/// - in-cluster storage: `secret_suffix` set, `in_cluster_config` true, everything else empty
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Backend {
    /// Backend type for external storage (e.g., "s3", "oss")
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub backend_type: String,
    /// Bucket (storage location) holding the state
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub bucket: String,
    /// Region of the bucket
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,
    /// State object key inside the bucket
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    /// Suffix of the Kubernetes secret holding in-cluster state
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret_suffix: String,
    /// Whether state is kept in the controller's own secret store
    #[serde(default)]
    pub in_cluster_config: bool,
}

/// Backend template carried by a Provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProviderBackend {
    #[serde(rename = "type", default)]
    pub backend_type: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_wire_format_is_camel_case() {
        let backend: Backend = serde_yaml::from_str(
            r"
type: s3
bucket: state-bucket
region: us-east-1
key: my-config
",
        )
        .unwrap();
        assert_eq!(backend.backend_type, "s3");
        assert_eq!(backend.key, "my-config");
        assert!(!backend.in_cluster_config);

        let json = serde_json::to_value(Backend {
            secret_suffix: "app".to_string(),
            in_cluster_config: true,
            ..Backend::default()
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"secretSuffix": "app", "inClusterConfig": true})
        );
    }
}
