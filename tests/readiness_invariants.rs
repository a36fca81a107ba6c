//! Readiness Invariant Tests
//!
//! The readiness verdict must gate on spec propagation before counters,
//! skip membership checks when role semantics are absent, and require a
//! leader (or an explicit ready-without-primary signal) otherwise.

use memberset::model::{
    AccessMode, InstanceSet, MemberStatus, ReplicaRole, RoleProbe,
};
use memberset::readiness::is_instance_set_ready;

fn role(name: &str, is_leader: bool) -> ReplicaRole {
    ReplicaRole {
        name: name.to_string(),
        is_leader,
        can_vote: true,
        access_mode: AccessMode::ReadWrite,
    }
}

fn member(name: &str, r: ReplicaRole) -> MemberStatus {
    MemberStatus {
        pod_name: name.to_string(),
        role: Some(r),
        ready: true,
        ready_without_primary: false,
    }
}

/// Three replicas, counters aligned, generation propagated.
fn counters_aligned() -> InstanceSet {
    let mut its = InstanceSet::named("db");
    its.meta.generation = 7;
    its.spec.replicas = Some(3);
    its.status.observed_generation = 7;
    its.status.current_generation = 7;
    its.status.replicas = 3;
    its.status.ready_replicas = 3;
    its.status.updated_replicas = 3;
    its
}

fn with_role_semantics(mut its: InstanceSet) -> InstanceSet {
    its.spec.roles = Some(vec![role("leader", true), role("follower", false)]);
    its.spec.role_probe = Some(RoleProbe {
        period_seconds: 2,
        timeout_seconds: 1,
    });
    its.status.members_status = vec![
        member("db-0", role("leader", true)),
        member("db-1", role("follower", false)),
        member("db-2", role("follower", false)),
    ];
    its
}

#[test]
fn generation_gate_dominates_matching_counters() {
    // Every replica counter matches the declared count, yet the spec has
    // not been observed: not ready.
    let mut its = with_role_semantics(counters_aligned());
    its.status.observed_generation = 6;
    assert!(!is_instance_set_ready(&its));

    let mut its = with_role_semantics(counters_aligned());
    its.status.current_generation = 6;
    assert!(!is_instance_set_ready(&its));
}

#[test]
fn no_declared_roles_ready_on_counters_alone() {
    let its = counters_aligned();
    assert!(its.status.members_status.is_empty());
    assert!(is_instance_set_ready(&its));
}

#[test]
fn role_semantics_require_full_membership_and_leader() {
    let its = with_role_semantics(counters_aligned());
    assert!(is_instance_set_ready(&its));

    // missing member
    let mut short = with_role_semantics(counters_aligned());
    short.status.members_status.pop();
    assert!(!is_instance_set_ready(&short));

    // members present, nobody leads
    let mut leaderless = with_role_semantics(counters_aligned());
    for m in &mut leaderless.status.members_status {
        m.role = Some(role("follower", false));
    }
    assert!(!is_instance_set_ready(&leaderless));

    // ready-without-primary substitutes for a leader
    let mut bootstrap = leaderless;
    bootstrap.status.members_status[0].ready_without_primary = true;
    assert!(is_instance_set_ready(&bootstrap));
}

#[test]
fn bootstrap_and_availability_gates() {
    let mut its = with_role_semantics(counters_aligned());
    its.status.init_replicas = 3;
    its.status.ready_init_replicas = 1;
    assert!(!is_instance_set_ready(&its));

    let mut its = with_role_semantics(counters_aligned());
    its.spec.min_ready_seconds = 5;
    its.status.available_replicas = 2;
    assert!(!is_instance_set_ready(&its));
    its.status.available_replicas = 3;
    assert!(is_instance_set_ready(&its));
}

#[test]
fn unsized_workload_is_never_ready() {
    let mut its = with_role_semantics(counters_aligned());
    its.spec.replicas = None;
    assert!(!is_instance_set_ready(&its));
}
