//! Label and Environment Vocabulary
//!
//! Exact label keys, env var names, and the default action image. These
//! strings are a compatibility surface shared with the object store and
//! the action tool containers; changing any of them breaks existing
//! deployments.

use std::collections::BTreeMap;

use super::instance_set::InstanceSet;

/// Kind strings for the objects this core touches.
pub const KIND_INSTANCE_SET: &str = "InstanceSet";
pub const KIND_POD: &str = "Pod";
pub const KIND_JOB: &str = "Job";
pub const KIND_VOLUME_CLAIM: &str = "PersistentVolumeClaim";

/// Marks objects managed by this controller; value is the workload kind.
pub const MANAGED_BY_LABEL_KEY: &str = "workloads.memberset.io/managed-by";
/// Names the owning workload instance.
pub const INSTANCE_LABEL_KEY: &str = "workloads.memberset.io/instance";
/// Role currently held by a pod, as reported by the role probe.
pub const ROLE_LABEL_KEY: &str = "memberset.io/role";
/// Member is usable before a primary has been elected.
pub const READY_WITHOUT_PRIMARY_LABEL_KEY: &str = "memberset.io/ready-without-primary";
/// Scenario an action job belongs to (one membership transition).
pub const JOB_SCENARIO_LABEL_KEY: &str = "memberset.io/job-scenario";
/// Action type of a job.
pub const JOB_TYPE_LABEL_KEY: &str = "memberset.io/job-type";
/// Idempotency marker; flips `"false"` to `"true"` exactly once.
pub const JOB_HANDLED_LABEL_KEY: &str = "memberset.io/job-handled";
pub const JOB_HANDLED_FALSE: &str = "false";
pub const JOB_HANDLED_TRUE: &str = "true";

/// Finalizer guarding generated objects against deletion before cleanup.
pub const FINALIZER_NAME: &str = "workloads.memberset.io/finalizer";

/// Env var names injected into every action container.
pub const LEADER_HOST_VAR_NAME: &str = "MEMBERSET_LEADER_HOST";
pub const SERVICE_PORT_VAR_NAME: &str = "MEMBERSET_SERVICE_PORT";
pub const TARGET_HOST_VAR_NAME: &str = "MEMBERSET_TARGET_HOST";
pub const USERNAME_CREDENTIAL_VAR_NAME: &str = "MEMBERSET_USERNAME";
pub const PASSWORD_CREDENTIAL_VAR_NAME: &str = "MEMBERSET_PASSWORD";

const DEFAULT_ACTION_IMAGE: &str = "busybox:latest";

/// Image used when no action policy configures one.
pub fn default_action_image() -> &'static str {
    DEFAULT_ACTION_IMAGE
}

/// Labels identifying objects managed for the named workload instance.
pub fn match_labels(instance_name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(
        MANAGED_BY_LABEL_KEY.to_string(),
        KIND_INSTANCE_SET.to_string(),
    );
    labels.insert(INSTANCE_LABEL_KEY.to_string(), instance_name.to_string());
    labels
}

/// Selector for the workload's service.
///
/// The non-headless service additionally pins the leader role so traffic
/// only reaches the member allowed to serve it; the headless service
/// matches every member.
pub fn svc_selector(its: &InstanceSet, headless: bool) -> BTreeMap<String, String> {
    let mut selector = BTreeMap::new();

    if !headless {
        for role in its.declared_roles() {
            if role.is_leader && !role.name.is_empty() {
                selector.insert(ROLE_LABEL_KEY.to_string(), role.name.clone());
                break;
            }
        }
    }

    for (k, v) in &its.spec.selector {
        selector.insert(k.clone(), v.clone());
    }
    selector
}
