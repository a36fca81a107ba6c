//! Generalized Object Model
//!
//! Every object this core generates or adopts (pods, action jobs, volume
//! claims, the workload itself) carries the same metadata block: name,
//! UID, labels, annotations, owner references, and finalizers. The
//! [`MetaObject`] trait is the seam through which the ownership
//! reconciler and the staging layer see objects without knowing their
//! concrete type.
//!
//! Invariant: at most one owner reference on any object has
//! `controller = true`. The ownership reconciler enforces this; nothing
//! else may append controller references.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::labels::{KIND_INSTANCE_SET, KIND_JOB, KIND_POD, KIND_VOLUME_CLAIM};

/// A reference from an object to one of its owners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerReference {
    /// API version of the owner, `group/version` or bare `version`
    pub api_version: String,
    /// Kind of the owner
    pub kind: String,
    /// Name of the owner
    pub name: String,
    /// UID of the owner
    pub uid: Uuid,
    /// Whether this reference governs the object's deletion lifecycle
    pub controller: bool,
}

/// Metadata common to every object in the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectMeta {
    pub name: String,
    pub uid: Option<Uuid>,
    /// Spec generation; bumped by the store on every spec change
    pub generation: i64,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub owner_references: Vec<OwnerReference>,
    pub finalizers: Vec<String>,
    /// Set once deletion has been requested; finalizers can no longer be
    /// added past this point
    pub deletion_timestamp: Option<String>,
}

impl ObjectMeta {
    /// Metadata carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The owner reference with `controller = true`, if any.
    pub fn controller_ref(&self) -> Option<&OwnerReference> {
        self.owner_references.iter().find(|r| r.controller)
    }

    /// Whether the object is being deleted.
    pub fn is_terminating(&self) -> bool {
        self.deletion_timestamp.is_some()
    }

    /// Whether the finalizer is already registered.
    pub fn has_finalizer(&self, finalizer: &str) -> bool {
        self.finalizers.iter().any(|f| f == finalizer)
    }
}

/// Object seam used by the ownership reconciler and the staging layer.
pub trait MetaObject {
    /// Object kind, a stable string per concrete type.
    fn kind(&self) -> &'static str;
    fn meta(&self) -> &ObjectMeta;
    fn meta_mut(&mut self) -> &mut ObjectMeta;
}

/// A replica pod as observed by the caller's reconciliation pass.
///
/// Health probing is external; `ready` reflects the store's view of the
/// pod condition at list time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pod {
    pub meta: ObjectMeta,
    pub ready: bool,
}

impl Pod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            meta: ObjectMeta::named(name),
            ready: false,
        }
    }
}

impl MetaObject for Pod {
    fn kind(&self) -> &'static str {
        KIND_POD
    }
    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}

/// An environment entry passed to an action container. `value` and
/// `value_from` are mutually exclusive; both are mirrored verbatim from
/// the workload's credential spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: Option<String>,
    pub value_from: Option<super::instance_set::ValueFrom>,
}

impl EnvVar {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            value_from: None,
        }
    }
}

/// Restart policy of the action pod template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestartPolicy {
    OnFailure,
    Never,
}

/// Image pull policy of an action container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImagePullPolicy {
    IfNotPresent,
    Always,
}

/// The single container an action job runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub image_pull_policy: ImagePullPolicy,
    pub command: Vec<String>,
    pub args: Vec<String>,
    pub env: Vec<EnvVar>,
}

/// Pod template embedded in an action job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodTemplate {
    pub containers: Vec<Container>,
    pub restart_policy: RestartPolicy,
}

/// Terminal counters reported by the store for a job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobStatus {
    pub succeeded: u32,
    pub failed: u32,
}

/// A membership action job: an out-of-band task (promote, switchover,
/// member-join, member-leave, log-sync) driving a role transition.
///
/// The scenario, type, and handled flag live in labels so the store can
/// filter on them; see [`crate::model::labels`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionJob {
    pub meta: ObjectMeta,
    pub suspend: bool,
    pub template: PodTemplate,
    pub status: JobStatus,
}

impl MetaObject for ActionJob {
    fn kind(&self) -> &'static str {
        KIND_JOB
    }
    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}

/// A storage claim. Exempt from the controller finalizer by design:
/// claims must survive independently of the controller's deletion
/// lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeClaim {
    pub meta: ObjectMeta,
}

impl MetaObject for VolumeClaim {
    fn kind(&self) -> &'static str {
        KIND_VOLUME_CLAIM
    }
    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}

impl MetaObject for super::instance_set::InstanceSet {
    fn kind(&self) -> &'static str {
        KIND_INSTANCE_SET
    }
    fn meta(&self) -> &ObjectMeta {
        &self.meta
    }
    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.meta
    }
}
