//! Configuration Controller Library
//!
//! Resolves infrastructure-as-code `Configuration` resources into the
//! definition an execution engine runs: classifies the submitted body, looks
//! up the referenced `Provider`, resolves the remote-state backend, renders it
//! and appends provider overlays for local cloud emulators.
//!
//! ## Quick Start
//!
//! ```rust
//! use configuration_controller::prelude::*;
//! ```
//!
//! This brings commonly used types and traits into scope. For more specific imports,
//! use the individual modules.

pub mod config;
pub mod constants;
pub mod controller;
pub mod crd;
pub mod observability;
pub mod prelude;
