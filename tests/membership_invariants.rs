//! Membership Ranking Invariant Tests
//!
//! Proves the ranking properties the rest of the controller leans on:
//! - the priority map assigns strictly distinct non-zero tiers
//! - unknown role names rank below the empty tier
//! - `reverse` reverses the full total order, tie-break included
//! - the members-status refresh is a full recompute, leader first

use memberset::membership::{
    compose_role_priority_map, set_members_status, sort_pods, EMPTY_PRIORITY,
};
use memberset::model::{AccessMode, InstanceSet, Pod, ReplicaRole, ROLE_LABEL_KEY};

fn role(name: &str, is_leader: bool, can_vote: bool, access_mode: AccessMode) -> ReplicaRole {
    ReplicaRole {
        name: name.to_string(),
        is_leader,
        can_vote,
        access_mode,
    }
}

fn consensus_roles() -> Vec<ReplicaRole> {
    vec![
        role("leader", true, true, AccessMode::ReadWrite),
        role("follower-rw", false, true, AccessMode::ReadWrite),
        role("follower-ro", false, true, AccessMode::Readonly),
        role("follower-none", false, true, AccessMode::None),
        role("learner", false, false, AccessMode::Readonly),
    ]
}

fn pod(name: &str, role_name: &str, ready: bool) -> Pod {
    let mut pod = Pod::new(name);
    pod.ready = ready;
    if !role_name.is_empty() {
        pod.meta
            .labels
            .insert(ROLE_LABEL_KEY.to_string(), role_name.to_string());
    }
    pod
}

fn pod_names(pods: &[Pod]) -> Vec<String> {
    pods.iter().map(|p| p.meta.name.clone()).collect()
}

#[test]
fn five_tiers_plus_empty_are_distinct_and_ordered() {
    let map = compose_role_priority_map(&consensus_roles());

    let tiers = [
        ("leader", map.get("leader")),
        ("follower-rw", map.get("follower-rw")),
        ("follower-ro", map.get("follower-ro")),
        ("follower-none", map.get("follower-none")),
        ("learner", map.get("learner")),
        ("", map.get("")),
    ];
    for window in tiers.windows(2) {
        assert!(
            window[0].1 > window[1].1,
            "{:?} must outrank {:?}",
            window[0].0,
            window[1].0
        );
    }
    for (_, tier) in tiers {
        assert!(tier > 0);
    }
    assert_eq!(map.get(""), EMPTY_PRIORITY);
}

#[test]
fn unregistered_role_ranks_below_empty() {
    let map = compose_role_priority_map(&consensus_roles());
    assert!(map.get("") > map.get("role-removed-from-spec"));
    assert_eq!(map.get("role-removed-from-spec"), 0);
}

#[test]
fn reverse_is_full_order_reversal() {
    // Includes ties within the follower tier so the tie-break direction
    // is exercised, with unique (priority, ordinal) keys throughout.
    let map = compose_role_priority_map(&consensus_roles());
    let mut pods = vec![
        pod("db-3", "follower-ro", true),
        pod("db-0", "leader", true),
        pod("db-5", "", true),
        pod("db-1", "follower-ro", true),
        pod("db-4", "learner", true),
        pod("db-2", "unknown-role", true),
    ];

    sort_pods(&mut pods, &map, false);
    let forward = pod_names(&pods);
    assert_eq!(
        forward,
        vec!["db-2", "db-5", "db-4", "db-1", "db-3", "db-0"]
    );

    sort_pods(&mut pods, &map, true);
    let backward = pod_names(&pods);

    let mut expected = forward.clone();
    expected.reverse();
    assert_eq!(backward, expected, "reverse must flip ordinals within tiers too");
}

#[test]
fn status_refresh_is_leader_first_and_discards_previous() {
    let mut its = InstanceSet::named("db");
    its.spec.roles = Some(consensus_roles());

    set_members_status(
        &mut its,
        &[
            pod("db-2", "follower-ro", true),
            pod("db-0", "leader", true),
            pod("db-1", "follower-rw", true),
        ],
    );
    let ordered: Vec<&str> = its
        .status
        .members_status
        .iter()
        .map(|m| m.pod_name.as_str())
        .collect();
    assert_eq!(ordered, vec!["db-0", "db-1", "db-2"]);

    // a later refresh with fewer pods fully replaces the snapshot
    set_members_status(&mut its, &[pod("db-1", "leader", true)]);
    assert_eq!(its.status.members_status.len(), 1);
    assert_eq!(its.status.members_status[0].pod_name, "db-1");
}

#[test]
fn status_refresh_excludes_unready_and_unknown_roles() {
    let mut its = InstanceSet::named("db");
    its.spec.roles = Some(consensus_roles());

    set_members_status(
        &mut its,
        &[
            pod("db-0", "leader", false),
            pod("db-1", "retired-role", true),
            pod("db-2", "learner", true),
        ],
    );
    let ordered: Vec<&str> = its
        .status
        .members_status
        .iter()
        .map(|m| m.pod_name.as_str())
        .collect();
    assert_eq!(ordered, vec!["db-2"]);
}
