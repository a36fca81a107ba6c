//! InstanceSet Workload
//!
//! The workload abstraction whose membership this core manages: a
//! role-aware, ordinal-indexed replica set. The spec is read-only to this
//! core; the status is written only through the members-status refresh
//! and the action lifecycle. Conversion between the InstanceSet and the
//! lower-level ordinal-replica primitive is an external concern, so the
//! replica counters on the status arrive pre-computed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::member::MemberStatus;
use super::object::ObjectMeta;
use super::role::ReplicaRole;

/// An external value source for a credential entry (e.g. a secret key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFrom {
    /// Name of the source object holding the value
    pub source: String,
    /// Key within the source object
    pub key: String,
}

/// One credential entry: a literal value or an external reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialVar {
    pub value: Option<String>,
    pub value_from: Option<ValueFrom>,
}

/// Credential injected into every action container when configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: CredentialVar,
    pub password: CredentialVar,
}

/// Per-action override: image, command, and args for one action type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub image: String,
    pub command: Vec<String>,
    pub args: Vec<String>,
}

/// Operator-configured policies for the membership action toolset.
///
/// Commands and args are per-action only. Images fall back along a fixed
/// chain so a single configured image can cover the whole toolset; see
/// [`crate::actions::resolve_action_image`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipReconfiguration {
    pub switchover_action: Option<ActionSpec>,
    pub member_join_action: Option<ActionSpec>,
    pub member_leave_action: Option<ActionSpec>,
    pub log_sync_action: Option<ActionSpec>,
    pub promote_action: Option<ActionSpec>,
}

/// Role probe configuration. Presence alone matters to readiness: with no
/// probe configured, membership state is never reported and the readiness
/// verdict stops at the structural checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleProbe {
    pub period_seconds: u32,
    pub timeout_seconds: u32,
}

/// Declared (desired) state of the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSetSpec {
    /// Declared replica count; unset means the workload is not yet sized
    pub replicas: Option<i32>,
    /// Declared roles; unset disables all role semantics
    pub roles: Option<Vec<ReplicaRole>>,
    /// Role probe configuration
    pub role_probe: Option<RoleProbe>,
    /// Minimum seconds a replica must be ready before counting available
    pub min_ready_seconds: i32,
    /// Primary service port exposed to action containers
    pub service_port: Option<u16>,
    /// Label selector the workload's services match on
    pub selector: BTreeMap<String, String>,
    /// Membership action policies
    pub membership_reconfiguration: Option<MembershipReconfiguration>,
    /// Credential injected into action containers
    pub credential: Option<Credential>,
}

/// Observed state of the workload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSetStatus {
    /// Latest spec generation the controller has observed
    pub observed_generation: i64,
    /// Latest spec generation fully applied to the underlying replicas
    pub current_generation: i64,
    pub replicas: i32,
    pub ready_replicas: i32,
    pub updated_replicas: i32,
    pub available_replicas: i32,
    /// Replicas that took part in initial cluster bootstrap
    pub init_replicas: i32,
    /// Bootstrap replicas that reached readiness
    pub ready_init_replicas: i32,
    /// Ordered membership snapshot, leader first; fully recomputed on
    /// every refresh
    pub members_status: Vec<MemberStatus>,
}

/// The workload object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSet {
    pub meta: ObjectMeta,
    pub spec: InstanceSetSpec,
    pub status: InstanceSetStatus,
}

impl InstanceSet {
    /// A named, otherwise empty workload.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            meta: ObjectMeta::named(name),
            ..Self::default()
        }
    }

    /// Declared roles, empty when unset.
    pub fn declared_roles(&self) -> &[ReplicaRole] {
        self.spec.roles.as_deref().unwrap_or(&[])
    }
}
