//! # Custom Resource Definitions
//!
//! CRD types for the Configuration Controller.
//!
//! ## Module Structure
//!
//! - `configuration.rs` - The user-submitted `Configuration` resource
//! - `provider.rs` - The `Provider` resource supplying backend defaults and a provider-kind tag
//! - `backend.rs` - Remote-state backend descriptor shared by both resources

mod backend;
mod configuration;
mod provider;

// Re-export all public types
pub use backend::{Backend, ProviderBackend};
pub use configuration::{Configuration, ConfigurationSpec, ProviderReference};
pub use provider::{Provider, ProviderSpec};
