//! Membership Ranking and Status
//!
//! Turns the declared role set into a total-order priority map, ranks
//! replicas by role priority and ordinal, and recomputes the workload's
//! ordered members-status snapshot.
//!
//! Ranking and status computation are total functions: an unknown role on
//! a pod excludes that pod (soft skip), it never aborts the pass.

mod priority;
mod sort;
mod status;

pub use priority::{
    compose_role_priority_map, RolePriorityMap, EMPTY_PRIORITY, FOLLOWER_NONE_PRIORITY,
    FOLLOWER_READONLY_PRIORITY, FOLLOWER_READ_WRITE_PRIORITY, LEADER_PRIORITY, LEARNER_PRIORITY,
};
pub use sort::{sort_members, sort_members_status, sort_pods};
pub use status::{is_member_ready, leader_pod_name, pod_role_name, set_members_status};
