//! # Environment Comparison
//!
//! Order-insensitive comparison of container environment variables, used to
//! detect drift between a desired and an observed pod spec.

use k8s_openapi::api::core::v1::EnvVar;
use std::cmp::Ordering;

/// Compare two env var lists as sets keyed by name
///
/// Every field takes part in the comparison. Duplicate names are kept, so
/// lists of different lengths never compare equal.
#[must_use]
pub fn compare_container_envs(left: &[EnvVar], right: &[EnvVar]) -> bool {
    left.len() == right.len() && sorted_by_name(left) == sorted_by_name(right)
}

fn sorted_by_name(envs: &[EnvVar]) -> Vec<&EnvVar> {
    let mut sorted: Vec<&EnvVar> = envs.iter().collect();
    sorted.sort_by(|a, b| compare_env(a, b));
    sorted
}

// Ties on name fall back to the remaining fields so duplicates sort deterministically.
fn compare_env(a: &EnvVar, b: &EnvVar) -> Ordering {
    a.name
        .cmp(&b.name)
        .then_with(|| a.value.cmp(&b.value))
        .then_with(|| {
            let a_from = serde_json::to_string(&a.value_from).unwrap_or_default();
            let b_from = serde_json::to_string(&b.value_from).unwrap_or_default();
            a_from.cmp(&b_from)
        })
}
