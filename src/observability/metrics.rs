//! # Metrics
//!
//! Prometheus metrics for monitoring Configuration validation.
//!
//! ## Metrics Exposed
//!
//! - `configuration_validations_total{kind}` - Configurations validated successfully, by kind
//! - `configuration_validation_errors_total{reason}` - Validation failures, by error reason

use anyhow::Result;
use prometheus::{Encoder, IntCounterVec, Registry, TextEncoder};
use std::sync::LazyLock;

pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

static VALIDATIONS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "configuration_validations_total",
            "Total number of Configurations validated successfully by kind",
        ),
        &["kind"],
    )
    .expect("Failed to create VALIDATIONS_TOTAL metric - this should never happen")
});

static VALIDATION_ERRORS_TOTAL: LazyLock<IntCounterVec> = LazyLock::new(|| {
    IntCounterVec::new(
        prometheus::Opts::new(
            "configuration_validation_errors_total",
            "Total number of Configuration validation errors by reason",
        ),
        &["reason"],
    )
    .expect("Failed to create VALIDATION_ERRORS_TOTAL metric - this should never happen")
});

/// Register all validation metrics with the shared registry
///
/// Safe to call more than once; metrics already registered are left in place.
///
/// # Errors
///
/// Returns an error if a metric cannot be registered for any other reason.
pub fn register_metrics() -> Result<()> {
    register(Box::new(VALIDATIONS_TOTAL.clone()))?;
    register(Box::new(VALIDATION_ERRORS_TOTAL.clone()))?;

    Ok(())
}

fn register(collector: Box<dyn prometheus::core::Collector>) -> Result<()> {
    match REGISTRY.register(collector) {
        Ok(()) | Err(prometheus::Error::AlreadyReg) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

pub fn increment_validations(kind: &str) {
    VALIDATIONS_TOTAL.with_label_values(&[kind]).inc();
}

pub fn increment_validation_errors(reason: &str) {
    VALIDATION_ERRORS_TOTAL.with_label_values(&[reason]).inc();
}

/// Encode all registered metrics in the Prometheus text exposition format
///
/// # Errors
///
/// Returns an error if encoding fails or the output is not valid UTF-8.
pub fn gather_metrics() -> Result<String> {
    let mut buffer = Vec::new();
    TextEncoder::new().encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
