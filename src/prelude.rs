//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ## Usage
//!
//! ```rust
//! use configuration_controller::prelude::*;
//! ```
//!
//! This brings into scope:
//! - All CRD types (Configuration, Provider, Backend, etc.)
//! - The validator and its result/error types
//! - Provider store and renderer traits with their default implementations
//! - Config types

// CRD types - most commonly used
pub use crate::crd::*;

// Validation - core controller functionality
pub use crate::controller::configuration::{
    resolve_backend, ConfigurationError, ConfigurationKind, ConfigurationValidator,
    ValidatedConfiguration,
};
pub use crate::controller::env::compare_container_envs;
pub use crate::controller::overlay::provider_overlay;

// Seams - needed for plugging in stores and renderers
pub use crate::controller::provider::{
    InMemoryProviderStore, KubeProviderStore, ProviderLookupPolicy, ProviderStore,
    ProviderStoreError,
};
pub use crate::controller::render::{BackendRenderer, RenderError, TemplateBackendRenderer};

// Config types - for configuration management
pub use crate::config::{ControllerConfig, LogFormat};
