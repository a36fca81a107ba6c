//! Replica Roles
//!
//! A role describes what a member of the replica set is allowed to do:
//! whether it is the leader, whether it votes in membership decisions, and
//! which data access mode it serves. Roles are declared on the workload
//! spec and attached to pods via the role label.
//!
//! Role names are case-normalized (lower-case) for every lookup. Within
//! one workload, roles are unique by normalized name; if a spec declares
//! duplicate names, the last declaration wins.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Data access mode served by a voting member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Serves no data traffic
    None,
    /// Serves reads only
    Readonly,
    /// Serves reads and writes
    ReadWrite,
}

/// A role a replica can hold within the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicaRole {
    /// Role name; compared case-insensitively everywhere
    pub name: String,
    /// Exactly one declared role should be the leader
    pub is_leader: bool,
    /// Whether this role participates in membership votes
    pub can_vote: bool,
    /// Access mode for voting, non-leader roles
    pub access_mode: AccessMode,
}

impl ReplicaRole {
    /// Normalized (lower-case) role name used for all lookups.
    pub fn normalized_name(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Build a lookup map from normalized role name to the declared role.
///
/// Duplicate normalized names resolve to the last declaration (map
/// overwrite semantics).
pub fn compose_role_map(roles: &[ReplicaRole]) -> HashMap<String, ReplicaRole> {
    let mut role_map = HashMap::with_capacity(roles.len());
    for role in roles {
        role_map.insert(role.normalized_name(), role.clone());
    }
    role_map
}
