//! Member Status
//!
//! A per-replica snapshot of membership state. The status list is fully
//! recomputed on every refresh; the previous list is discarded, never
//! merged.

use serde::{Deserialize, Serialize};

use super::role::ReplicaRole;

/// Observed membership state of one replica.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStatus {
    /// Name of the pod backing this member (`{parent}-{ordinal}`)
    pub pod_name: String,
    /// Role currently held, if the role probe has reported one that is
    /// still declared on the spec
    pub role: Option<ReplicaRole>,
    /// Pod-level readiness
    pub ready: bool,
    /// Set when the cluster reports the member usable without a primary
    /// having been elected (e.g. a consensus-less bootstrap phase)
    pub ready_without_primary: bool,
}

impl MemberStatus {
    /// True if this member currently holds the leader role.
    pub fn is_leader(&self) -> bool {
        self.role.as_ref().map(|r| r.is_leader).unwrap_or(false)
    }
}
