//! # Backend Rendering
//!
//! Turns a resolved [`Backend`] into a `terraform { backend ... }` block.
//!
//! In-cluster backends render a `kubernetes` backend whose state secret lives
//! in the controller namespace. External backends render a block of the
//! descriptor's own type addressing `bucket`/`key`/`region`.

use crate::constants::IN_CLUSTER_BACKEND_TYPE;
use crate::crd::Backend;
use minijinja::{context, Environment};
use thiserror::Error;

const IN_CLUSTER_TEMPLATE_NAME: &str = "backend/in-cluster.tf";
const EXTERNAL_TEMPLATE_NAME: &str = "backend/external.tf";

const IN_CLUSTER_TEMPLATE: &str = r"terraform {
  backend {{ backend_type|hcl_string }} {
    secret_suffix     = {{ secret_suffix|hcl_string }}
    in_cluster_config = true
    namespace         = {{ namespace|hcl_string }}
  }
}";

const EXTERNAL_TEMPLATE: &str = r"terraform {
  backend {{ backend_type|hcl_string }} {
    bucket = {{ bucket|hcl_string }}
    key    = {{ key|hcl_string }}
    region = {{ region|hcl_string }}
  }
}";

/// Quote `value` as an HCL string literal
///
/// Escapes quotes, backslashes and control characters, and doubles the `$`/`%`
/// of `${` and `%{` so template sequences stay literal.
#[must_use]
pub fn hcl_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '$' | '%' if chars.peek() == Some(&'{') => {
                quoted.push(c);
                quoted.push(c);
            }
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("backend type is required for external state storage (bucket '{bucket}')")]
    MissingBackendType { bucket: String },
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders backend-declaration text for a resolved backend
pub trait BackendRenderer: Send + Sync {
    /// Render `backend` for a controller running in `controller_namespace`
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the backend cannot be expressed as a backend block.
    fn render(&self, backend: &Backend, controller_namespace: &str) -> Result<String, RenderError>;
}

/// Default renderer backed by `minijinja` templates
pub struct TemplateBackendRenderer {
    env: Environment<'static>,
}

impl std::fmt::Debug for TemplateBackendRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateBackendRenderer")
            .field("templates", &[IN_CLUSTER_TEMPLATE_NAME, EXTERNAL_TEMPLATE_NAME])
            .finish()
    }
}

impl TemplateBackendRenderer {
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_filter("hcl_string", |value: &str| -> String { hcl_string(value) });
        env.add_template(IN_CLUSTER_TEMPLATE_NAME, IN_CLUSTER_TEMPLATE)?;
        env.add_template(EXTERNAL_TEMPLATE_NAME, EXTERNAL_TEMPLATE)?;
        Ok(Self { env })
    }
}

impl BackendRenderer for TemplateBackendRenderer {
    fn render(&self, backend: &Backend, controller_namespace: &str) -> Result<String, RenderError> {
        if backend.in_cluster_config {
            let template = self.env.get_template(IN_CLUSTER_TEMPLATE_NAME)?;
            return Ok(template.render(context! {
                backend_type => IN_CLUSTER_BACKEND_TYPE,
                secret_suffix => backend.secret_suffix,
                namespace => controller_namespace,
            })?);
        }

        if backend.backend_type.is_empty() {
            return Err(RenderError::MissingBackendType {
                bucket: backend.bucket.clone(),
            });
        }

        let template = self.env.get_template(EXTERNAL_TEMPLATE_NAME)?;
        Ok(template.render(context! {
            backend_type => backend.backend_type,
            bucket => backend.bucket,
            key => backend.key,
            region => backend.region,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> TemplateBackendRenderer {
        TemplateBackendRenderer::new().unwrap()
    }

    #[test]
    fn test_render_in_cluster_backend() {
        let backend = Backend {
            secret_suffix: "my-config".to_string(),
            in_cluster_config: true,
            ..Backend::default()
        };
        let rendered = renderer().render(&backend, "provisioning-system").unwrap();
        assert_eq!(
            rendered,
            r#"terraform {
  backend "kubernetes" {
    secret_suffix     = "my-config"
    in_cluster_config = true
    namespace         = "provisioning-system"
  }
}"#
        );
    }

    #[test]
    fn test_render_external_backend() {
        let backend = Backend {
            backend_type: "s3".to_string(),
            bucket: "tf-state".to_string(),
            region: "eu-west-1".to_string(),
            key: "my-config".to_string(),
            ..Backend::default()
        };
        let rendered = renderer().render(&backend, "provisioning-system").unwrap();
        assert_eq!(
            rendered,
            r#"terraform {
  backend "s3" {
    bucket = "tf-state"
    key    = "my-config"
    region = "eu-west-1"
  }
}"#
        );
    }

    #[test]
    fn test_in_cluster_flag_wins_over_external_fields() {
        let backend = Backend {
            backend_type: "s3".to_string(),
            bucket: "ignored".to_string(),
            secret_suffix: "suffix".to_string(),
            in_cluster_config: true,
            ..Backend::default()
        };
        let rendered = renderer().render(&backend, "ns").unwrap();
        assert!(rendered.contains(r#"backend "kubernetes""#));
        assert!(!rendered.contains("ignored"));
    }

    #[test]
    fn test_hcl_string_escapes_literals() {
        let test_cases = vec![
            ("plain", r#""plain""#),
            (r#"a"b"#, r#""a\"b""#),
            (r"C:\state", r#""C:\\state""#),
            ("${var.secret}", r#""$${var.secret}""#),
            ("%{ if x }", r#""%%{ if x }""#),
            ("cost $5 100%", r#""cost $5 100%""#),
            ("line\nbreak", r#""line\nbreak""#),
        ];
        for (input, expected) in test_cases {
            assert_eq!(hcl_string(input), expected, "quoting {input:?}");
        }
    }

    #[test]
    fn test_injected_values_stay_inside_string_literals() {
        let backend = Backend {
            secret_suffix: r#"app" } } resource "x" "y" { name = "${var.leak}"#.to_string(),
            in_cluster_config: true,
            ..Backend::default()
        };
        let rendered = renderer().render(&backend, "ns").unwrap();
        assert!(rendered.contains(
            r#"secret_suffix     = "app\" } } resource \"x\" \"y\" { name = \"$${var.leak}""#
        ));
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn test_external_backend_without_type_fails() {
        let backend = Backend {
            bucket: "tf-state".to_string(),
            ..Backend::default()
        };
        let err = renderer().render(&backend, "ns").unwrap_err();
        assert!(matches!(err, RenderError::MissingBackendType { ref bucket } if bucket == "tf-state"));
    }
}
