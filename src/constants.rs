//! # Constants
//!
//! Shared constants used throughout the controller.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Provider looked up when a Configuration carries no provider reference
pub const DEFAULT_PROVIDER_NAME: &str = "default";

/// Namespace the controller runs in when `POD_NAMESPACE` is not set
pub const DEFAULT_CONTROLLER_NAMESPACE: &str = "provisioning-system";

/// Namespace Provider resources are resolved in when `PROVIDER_NAMESPACE` is not set
pub const DEFAULT_PROVIDER_NAMESPACE: &str = "default";

/// Backend type rendered for in-cluster (Kubernetes secret) state storage
pub const IN_CLUSTER_BACKEND_TYPE: &str = "kubernetes";

/// Provider-kind tag for the LocalStack AWS emulator
pub const LOCALSTACK_PROVIDER_KIND: &str = "localstack";

/// Endpoint every emulated service is routed to for LocalStack providers
pub const LOCALSTACK_ENDPOINT: &str = "http://localstack.localstack.svc.cluster.local:4566";

/// Default log level when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info";
