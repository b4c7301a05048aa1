//! # Observability
//!
//! Logging setup and Prometheus metrics for the controller.

pub mod logging;
pub mod metrics;
