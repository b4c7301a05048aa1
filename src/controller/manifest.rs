//! # Manifest Loading
//!
//! Reads resources from YAML files for offline rendering.

use anyhow::{Context, Result};
use k8s_openapi::api::core::v1::EnvVar;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a single YAML document from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not deserialize into `T`.
pub fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Read a YAML list of container env vars from `path`
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a list of env vars.
pub fn read_env_list(path: &Path) -> Result<Vec<EnvVar>> {
    read_manifest(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::{Configuration, Provider};
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_configuration_manifest() {
        let file = write_temp(
            r"
apiVersion: provisioning.octopilot.io/v1beta1
kind: Configuration
metadata:
  name: data
spec:
  json: '{}'
",
        );
        let configuration: Configuration = read_manifest(file.path()).unwrap();
        assert_eq!(configuration.spec.json_body(), "{}");
    }

    #[test]
    fn test_read_provider_manifest() {
        let file = write_temp(
            r"
apiVersion: provisioning.octopilot.io/v1beta1
kind: Provider
metadata:
  name: default
spec:
  provider: localstack
  backend:
    type: s3
    bucket: state
    region: us-east-1
",
        );
        let provider: Provider = read_manifest(file.path()).unwrap();
        assert_eq!(provider.spec.kind(), "localstack");
        assert_eq!(provider.spec.backend.unwrap().bucket, "state");
    }

    #[test]
    fn test_read_env_list() {
        let file = write_temp(
            r"
- name: A
  value: '1'
- name: B
  valueFrom:
    secretKeyRef:
      name: creds
      key: token
",
        );
        let envs = read_env_list(file.path()).unwrap();
        assert_eq!(envs.len(), 2);
        assert_eq!(envs[1].name, "B");
        assert!(envs[1].value_from.is_some());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_manifest::<Configuration>(Path::new("/nonexistent/config.yaml"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.yaml"));
    }
}
