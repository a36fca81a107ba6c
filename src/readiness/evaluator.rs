//! Readiness Evaluator
//!
//! An ordered chain of early-exit checks; all must pass. Total function:
//! never errors, never inspects anything outside its argument.

use crate::model::InstanceSet;

/// Whether the whole replica group is ready.
///
/// Checks, in order:
/// 1. initial bootstrap complete (`ready_init_replicas == init_replicas`)
/// 2. the latest spec generation has been both observed and applied
/// 3. declared replica count set, and replicas == ready == updated == declared
/// 4. available replicas match, but only when `min_ready_seconds` is set
/// 5. with no roles declared or no role probe configured, readiness is
///    already satisfied
/// 6. otherwise the membership snapshot must cover every replica and
///    either some member is ready-without-primary or a leader exists
pub fn is_instance_set_ready(its: &InstanceSet) -> bool {
    if its.status.ready_init_replicas != its.status.init_replicas {
        return false;
    }
    if its.status.observed_generation != its.meta.generation
        || its.status.current_generation != its.meta.generation
    {
        return false;
    }
    let Some(replicas) = its.spec.replicas else {
        return false;
    };
    if its.status.replicas != replicas
        || its.status.ready_replicas != replicas
        || its.status.updated_replicas != replicas
    {
        return false;
    }
    if its.spec.min_ready_seconds > 0 && its.status.available_replicas != replicas {
        return false;
    }
    if its.spec.roles.is_none() || its.spec.role_probe.is_none() {
        return true;
    }
    let members_status = &its.status.members_status;
    if members_status.len() != replicas as usize {
        return false;
    }
    let mut has_leader = false;
    for status in members_status {
        if status.ready_without_primary {
            return true;
        }
        if status.is_leader() {
            has_leader = true;
            break;
        }
    }
    has_leader
}
