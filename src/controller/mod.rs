//! # Controller
//!
//! Core modules for the Configuration Controller.
//!
//! - `configuration`: Classification and rendering of Configuration resources
//! - `provider`: Provider lookup and the stores serving it
//! - `render`: Backend block rendering
//! - `overlay`: Static provider overlays for local cloud emulators
//! - `env`: Order-insensitive container env comparison
//! - `manifest`: Loading resources from YAML files

pub mod configuration;
pub mod env;
pub mod manifest;
pub mod overlay;
pub mod provider;
pub mod render;
