//! # Provider Overlays
//!
//! Static provider blocks appended to module configurations whose Provider is a
//! local emulation of a cloud. Overlays are keyed by the Provider's kind tag;
//! extend [`OVERLAYS`] to support another emulator.

use crate::constants::LOCALSTACK_PROVIDER_KIND;

/// Overlay text registered for a provider kind
#[derive(Debug, Clone, Copy)]
pub struct ProviderOverlay {
    pub kind: &'static str,
    pub text: &'static str,
}

const LOCALSTACK_OVERLAY: &str = r#"provider "aws" {
  s3_use_path_style           = true
  skip_credentials_validation = true
  skip_metadata_api_check     = true
  skip_requesting_account_id  = true

  endpoints {
    apigateway     = "http://localstack.localstack.svc.cluster.local:4566"
    cloudformation = "http://localstack.localstack.svc.cluster.local:4566"
    cloudwatch     = "http://localstack.localstack.svc.cluster.local:4566"
    dynamodb       = "http://localstack.localstack.svc.cluster.local:4566"
    ec2            = "http://localstack.localstack.svc.cluster.local:4566"
    es             = "http://localstack.localstack.svc.cluster.local:4566"
    firehose       = "http://localstack.localstack.svc.cluster.local:4566"
    iam            = "http://localstack.localstack.svc.cluster.local:4566"
    kinesis        = "http://localstack.localstack.svc.cluster.local:4566"
    lambda         = "http://localstack.localstack.svc.cluster.local:4566"
    route53        = "http://localstack.localstack.svc.cluster.local:4566"
    redshift       = "http://localstack.localstack.svc.cluster.local:4566"
    s3             = "http://localstack.localstack.svc.cluster.local:4566"
    secretsmanager = "http://localstack.localstack.svc.cluster.local:4566"
    ses            = "http://localstack.localstack.svc.cluster.local:4566"
    sns            = "http://localstack.localstack.svc.cluster.local:4566"
    sqs            = "http://localstack.localstack.svc.cluster.local:4566"
    ssm            = "http://localstack.localstack.svc.cluster.local:4566"
    stepfunctions  = "http://localstack.localstack.svc.cluster.local:4566"
    sts            = "http://localstack.localstack.svc.cluster.local:4566"
  }
}
"#;

/// Known local-emulation provider kinds and their overlay text
pub const OVERLAYS: &[ProviderOverlay] = &[ProviderOverlay {
    kind: LOCALSTACK_PROVIDER_KIND,
    text: LOCALSTACK_OVERLAY,
}];

/// Overlay text for `provider_kind`, empty when the kind has no overlay
#[must_use]
pub fn provider_overlay(provider_kind: &str) -> &'static str {
    OVERLAYS
        .iter()
        .find(|overlay| overlay.kind == provider_kind)
        .map_or("", |overlay| overlay.text)
}
