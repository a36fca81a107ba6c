//! Role Priority Tiers
//!
//! Each role classifies into exactly one tier; tiers are strictly ordered
//! bit flags so no two distinct categories collide. The empty tier (no
//! role assigned) always ranks above unknown role names, which resolve to
//! priority 0 at lookup time.

use std::collections::HashMap;

use crate::model::ReplicaRole;

pub const LEADER_PRIORITY: u32 = 1 << 5;
pub const FOLLOWER_READ_WRITE_PRIORITY: u32 = 1 << 4;
pub const FOLLOWER_READONLY_PRIORITY: u32 = 1 << 3;
pub const FOLLOWER_NONE_PRIORITY: u32 = 1 << 2;
pub const LEARNER_PRIORITY: u32 = 1 << 1;
pub const EMPTY_PRIORITY: u32 = 1 << 0;
// unknown role names resolve to 0

/// Total-order priority map over role names.
///
/// Keys are normalized role names plus the empty string ("no role
/// assigned"). Any name absent from the map has implicit priority 0,
/// strictly below the empty tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolePriorityMap(HashMap<String, u32>);

impl RolePriorityMap {
    /// Priority for a role name; 0 for unregistered names.
    pub fn get(&self, role_name: &str) -> u32 {
        self.0.get(role_name).copied().unwrap_or(0)
    }
}

/// Classify declared roles into priority tiers.
///
/// Leader outranks everything; voting followers rank by access mode;
/// non-voting roles are learners. Duplicate normalized names keep the
/// last declaration.
pub fn compose_role_priority_map(roles: &[ReplicaRole]) -> RolePriorityMap {
    use crate::model::AccessMode;

    let mut map = HashMap::with_capacity(roles.len() + 1);
    map.insert(String::new(), EMPTY_PRIORITY);
    for role in roles {
        let priority = if role.is_leader {
            LEADER_PRIORITY
        } else if role.can_vote {
            match role.access_mode {
                AccessMode::None => FOLLOWER_NONE_PRIORITY,
                AccessMode::Readonly => FOLLOWER_READONLY_PRIORITY,
                AccessMode::ReadWrite => FOLLOWER_READ_WRITE_PRIORITY,
            }
        } else {
            LEARNER_PRIORITY
        };
        map.insert(role.normalized_name(), priority);
    }
    RolePriorityMap(map)
}
