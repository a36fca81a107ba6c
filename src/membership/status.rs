//! Members-Status Refresh
//!
//! Recomputes the workload's ordered membership snapshot from the current
//! pod list. The previous snapshot is discarded, never merged. A pod
//! labeled with a role the spec no longer declares is excluded, not an
//! error.

use crate::model::{
    compose_role_map, InstanceSet, MemberStatus, Pod, READY_WITHOUT_PRIMARY_LABEL_KEY,
    ROLE_LABEL_KEY,
};
use crate::observability::Logger;

use super::priority::compose_role_priority_map;
use super::sort::sort_members_status;

/// Normalized role name a pod is labeled with; empty when unlabeled.
pub fn pod_role_name(pod: &Pod) -> String {
    pod.meta
        .labels
        .get(ROLE_LABEL_KEY)
        .map(|r| r.to_lowercase())
        .unwrap_or_default()
}

fn pod_is_ready_with_role(pod: &Pod) -> bool {
    pod.ready && pod.meta.labels.contains_key(ROLE_LABEL_KEY)
}

/// Recompute `its.status.members_status` from `pods`.
///
/// With roles declared: only pods that are ready and carry a declared
/// role are included, sorted leader first. Without roles: every pod is
/// included with its plain readiness, sorted by name.
pub fn set_members_status(its: &mut InstanceSet, pods: &[Pod]) {
    let logger = Logger::new("membership");

    let Some(roles) = its.spec.roles.clone() else {
        set_members_status_without_role(its, pods);
        return;
    };

    let role_map = compose_role_map(&roles);
    let mut new_members_status = Vec::new();
    for pod in pods {
        if !pod_is_ready_with_role(pod) {
            continue;
        }
        let role_name = pod_role_name(pod);
        let Some(role) = role_map.get(&role_name) else {
            // role no longer declared on the spec
            logger.debug(
                "MEMBER_ROLE_UNKNOWN",
                &[("pod", &pod.meta.name), ("role", &role_name)],
            );
            continue;
        };
        let ready_without_primary = pod
            .meta
            .labels
            .get(READY_WITHOUT_PRIMARY_LABEL_KEY)
            .map(|v| v == "true")
            .unwrap_or(false);
        new_members_status.push(MemberStatus {
            pod_name: pod.meta.name.clone(),
            role: Some(role.clone()),
            ready: true,
            ready_without_primary,
        });
    }

    let priority_map = compose_role_priority_map(&roles);
    sort_members_status(&mut new_members_status, &priority_map);
    its.status.members_status = new_members_status;
}

fn set_members_status_without_role(its: &mut InstanceSet, pods: &[Pod]) {
    let mut members_status: Vec<MemberStatus> = pods
        .iter()
        .map(|pod| MemberStatus {
            pod_name: pod.meta.name.clone(),
            role: None,
            ready: pod.ready,
            ready_without_primary: false,
        })
        .collect();
    members_status.sort_by(|a, b| a.pod_name.cmp(&b.pod_name));
    its.status.members_status = members_status;
}

/// Name of the pod currently holding the leader role, empty when none.
pub fn leader_pod_name(members_status: &[MemberStatus]) -> String {
    members_status
        .iter()
        .find(|m| m.is_leader())
        .map(|m| m.pod_name.clone())
        .unwrap_or_default()
}

/// Whether the named pod appears in the membership snapshot.
pub fn is_member_ready(pod_name: &str, members_status: &[MemberStatus]) -> bool {
    members_status.iter().any(|m| m.pod_name == pod_name)
}
