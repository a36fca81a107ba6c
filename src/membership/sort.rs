//! Member Ranking
//!
//! Stable total order over role-labeled, ordinal-addressable items:
//! primary key role priority (ascending, lowest tier first), tie-break
//! pod ordinal (ascending).
//!
//! `reverse` evaluates the whole comparison on the swapped pair, which
//! reverses the full total order including the tie-break direction. This
//! is deliberate: "reverse" never means "reverse roles, keep ordinals
//! ascending".

use crate::model::{pod_ordinal, MemberStatus, Pod};

use super::priority::RolePriorityMap;
use super::status::pod_role_name;

/// Stable-sort `items` by role priority, then ordinal.
///
/// `role_of` and `ordinal_of` project the sort keys; callers map ordinal
/// parse failures to 0 (soft skip) rather than aborting the sort.
pub fn sort_members<T>(
    items: &mut [T],
    priority_map: &RolePriorityMap,
    role_of: impl Fn(&T) -> String,
    ordinal_of: impl Fn(&T) -> i32,
    reverse: bool,
) {
    items.sort_by(|a, b| {
        let (x, y) = if reverse { (b, a) } else { (a, b) };
        let priority_x = priority_map.get(&role_of(x));
        let priority_y = priority_map.get(&role_of(y));
        priority_x
            .cmp(&priority_y)
            .then_with(|| ordinal_of(x).cmp(&ordinal_of(y)))
    });
}

/// Sort pods by role priority: unknown, empty, learner, followers,
/// leader last; reversed when `reverse` is set.
pub fn sort_pods(pods: &mut [Pod], priority_map: &RolePriorityMap, reverse: bool) {
    sort_members(
        pods,
        priority_map,
        |pod| pod_role_name(pod),
        |pod| pod_ordinal(&pod.meta.name).unwrap_or(0),
        reverse,
    );
}

/// Sort a members-status list leader first.
pub fn sort_members_status(members_status: &mut [MemberStatus], priority_map: &RolePriorityMap) {
    sort_members(
        members_status,
        priority_map,
        |member| {
            member
                .role
                .as_ref()
                .map(|r| r.normalized_name())
                .unwrap_or_default()
        },
        |member| pod_ordinal(&member.pod_name).unwrap_or(0),
        true,
    );
}
