//! Naming Schemes
//!
//! Every replica is named `{parent}-{ordinal}`; the ordinal is recovered
//! by matching the trailing `-<digits>` suffix. Action jobs are named
//! `{parent}-{generation}-{ordinal}-{type}`, which makes the name a
//! content address: building the same tuple twice yields the same name,
//! so create calls are naturally idempotent.
//!
//! These strings are a compatibility surface.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::actions::ActionType;

/// Result type for name parsing.
pub type NameResult<T> = Result<T, NameError>;

/// Naming errors. Malformed input, never retried; the caller decides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Pod name has no trailing numeric ordinal suffix
    #[error("wrong pod name: {0}")]
    MalformedPodName(String),
}

fn pod_name_regex() -> &'static Regex {
    static POD_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    POD_NAME_REGEX.get_or_init(|| Regex::new(r"(.*)-([0-9]+)$").expect("static pattern"))
}

/// Replica pod name for `parent` at `ordinal`.
pub fn pod_name(parent: &str, ordinal: i32) -> String {
    format!("{}-{}", parent, ordinal)
}

/// Recover the ordinal from a replica pod name.
pub fn pod_ordinal(pod_name: &str) -> NameResult<i32> {
    parse_parent_and_ordinal(pod_name).map(|(_, ordinal)| ordinal)
}

/// Split a replica pod name into parent name and ordinal.
pub fn parse_parent_and_ordinal(pod_name: &str) -> NameResult<(&str, i32)> {
    let captures = pod_name_regex()
        .captures(pod_name)
        .ok_or_else(|| NameError::MalformedPodName(pod_name.to_string()))?;
    let parent = captures.get(1).map(|m| m.as_str()).unwrap_or("");
    let ordinal = captures
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| NameError::MalformedPodName(pod_name.to_string()))?;
    Ok((parent, ordinal))
}

/// Deterministic action job name for one (workload generation, target
/// ordinal, action type) tuple.
pub fn action_name(parent: &str, generation: i64, ordinal: i32, action_type: ActionType) -> String {
    format!("{}-{}-{}-{}", parent, generation, ordinal, action_type.as_str())
}

/// Name of the workload's headless service.
pub fn headless_svc_name(workload: &str) -> String {
    format!("{}-headless", workload)
}

/// Name of the workload's environment config object.
pub fn env_config_name(workload: &str) -> String {
    format!("{}-its-env", workload)
}
