//! Object Model
//!
//! The shared vocabulary of the membership core:
//! - Roles and access modes
//! - Member status records
//! - Generalized object metadata (owner references, finalizers, labels)
//! - The InstanceSet workload spec/status
//! - Naming schemes, label keys, and annotation scoping
//!
//! Exact label keys, env var names, and naming schemes are a compatibility
//! surface and must not change between releases.

mod annotations;
mod instance_set;
mod labels;
mod member;
mod names;
mod object;
mod role;

pub use annotations::{
    add_annotation_scope, parse_annotations_of_scope, AnnotationScope, ROOT_SCOPE, SCOPE_SUFFIX,
    WORKLOAD_SCOPE,
};
pub use instance_set::{
    ActionSpec, Credential, CredentialVar, InstanceSet, InstanceSetSpec, InstanceSetStatus,
    MembershipReconfiguration, RoleProbe, ValueFrom,
};
pub use labels::{
    default_action_image, match_labels, svc_selector, FINALIZER_NAME, INSTANCE_LABEL_KEY,
    JOB_HANDLED_FALSE, JOB_HANDLED_LABEL_KEY, JOB_HANDLED_TRUE, JOB_SCENARIO_LABEL_KEY,
    JOB_TYPE_LABEL_KEY, KIND_INSTANCE_SET, KIND_JOB, KIND_POD, KIND_VOLUME_CLAIM,
    LEADER_HOST_VAR_NAME, MANAGED_BY_LABEL_KEY, PASSWORD_CREDENTIAL_VAR_NAME,
    READY_WITHOUT_PRIMARY_LABEL_KEY, ROLE_LABEL_KEY, SERVICE_PORT_VAR_NAME, TARGET_HOST_VAR_NAME,
    USERNAME_CREDENTIAL_VAR_NAME,
};
pub use member::MemberStatus;
pub use names::{
    action_name, env_config_name, headless_svc_name, parse_parent_and_ordinal, pod_name,
    pod_ordinal, NameError, NameResult,
};
pub use object::{
    ActionJob, Container, EnvVar, ImagePullPolicy, JobStatus, MetaObject, ObjectMeta,
    OwnerReference, Pod, PodTemplate, RestartPolicy, VolumeClaim,
};
pub use role::{compose_role_map, AccessMode, ReplicaRole};
