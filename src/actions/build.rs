//! Action Job Construction
//!
//! An action job runs a single container with `RestartPolicy=OnFailure`,
//! labeled for listing (managed-by, instance, scenario, type,
//! handled=false) and unsuspended so it runs immediately. The container
//! environment names the leader and target hosts through the headless
//! service, carries the primary service port, and mirrors the configured
//! credential verbatim.

use crate::membership::leader_pod_name;
use crate::model::{
    action_name, headless_svc_name, match_labels, pod_name, ActionJob, Container, EnvVar,
    ImagePullPolicy, InstanceSet, JobStatus, ObjectMeta, PodTemplate, RestartPolicy, FINALIZER_NAME,
    JOB_HANDLED_FALSE, JOB_HANDLED_LABEL_KEY, JOB_SCENARIO_LABEL_KEY, JOB_TYPE_LABEL_KEY,
    LEADER_HOST_VAR_NAME, PASSWORD_CREDENTIAL_VAR_NAME, SERVICE_PORT_VAR_NAME,
    TARGET_HOST_VAR_NAME, USERNAME_CREDENTIAL_VAR_NAME,
};
use crate::ownership::{set_ownership, OwnershipResult, OwnershipStrategy};
use crate::store::{ChangeSet, ObjectModel};

use super::policy::{action_args, action_command, resolve_action_image};
use super::ActionType;

/// Environment for an action container: leader host, service port, and
/// target host, all resolved through the headless service.
pub fn build_action_env(its: &InstanceSet, leader: &str, target: &str) -> Vec<EnvVar> {
    let svc_name = headless_svc_name(&its.meta.name);
    let svc_port = its.spec.service_port.unwrap_or(0);
    vec![
        EnvVar::literal(LEADER_HOST_VAR_NAME, format!("{}.{}", leader, svc_name)),
        EnvVar::literal(SERVICE_PORT_VAR_NAME, svc_port.to_string()),
        EnvVar::literal(TARGET_HOST_VAR_NAME, format!("{}.{}", target, svc_name)),
    ]
}

fn build_action_pod_template(
    its: &InstanceSet,
    mut env: Vec<EnvVar>,
    action_type: ActionType,
) -> PodTemplate {
    if let Some(credential) = &its.spec.credential {
        env.push(EnvVar {
            name: USERNAME_CREDENTIAL_VAR_NAME.to_string(),
            value: credential.username.value.clone(),
            value_from: credential.username.value_from.clone(),
        });
        env.push(EnvVar {
            name: PASSWORD_CREDENTIAL_VAR_NAME.to_string(),
            value: credential.password.value.clone(),
            value_from: credential.password.value_from.clone(),
        });
    }

    let reconfiguration = its.spec.membership_reconfiguration.as_ref();
    let container = Container {
        name: action_type.as_str().to_string(),
        image: resolve_action_image(reconfiguration, action_type),
        image_pull_policy: ImagePullPolicy::IfNotPresent,
        command: action_command(reconfiguration, action_type),
        args: action_args(reconfiguration, action_type),
        env,
    };
    PodTemplate {
        containers: vec![container],
        restart_policy: RestartPolicy::OnFailure,
    }
}

/// Build an action job ready for staging.
pub fn build_action(
    its: &InstanceSet,
    action_name: &str,
    action_type: ActionType,
    scenario: &str,
    leader: &str,
    target: &str,
) -> ActionJob {
    let env = build_action_env(its, leader, target);
    let template = build_action_pod_template(its, env, action_type);

    let mut meta = ObjectMeta::named(action_name);
    meta.labels = match_labels(&its.meta.name);
    meta.labels
        .insert(JOB_SCENARIO_LABEL_KEY.to_string(), scenario.to_string());
    meta.labels.insert(
        JOB_TYPE_LABEL_KEY.to_string(),
        action_type.as_str().to_string(),
    );
    meta.labels.insert(
        JOB_HANDLED_LABEL_KEY.to_string(),
        JOB_HANDLED_FALSE.to_string(),
    );

    ActionJob {
        meta,
        suspend: false,
        template,
        status: JobStatus::default(),
    }
}

/// Attach ownership to `action` and stage its creation.
pub fn create_action(
    strategy: OwnershipStrategy,
    model: &dyn ObjectModel,
    its: &InstanceSet,
    mut action: ActionJob,
    changes: &mut ChangeSet<ActionJob>,
) -> OwnershipResult<()> {
    set_ownership(strategy, model, its, &mut action, FINALIZER_NAME)?;
    changes.create(action);
    Ok(())
}

/// Plan one membership action against the replica at `target_ordinal`:
/// resolve the current leader, derive the deterministic action name,
/// build the job, attach ownership, and stage the create.
///
/// Returns the staged job. Building the same (generation, ordinal, type)
/// tuple twice stages an identical name, so the create is idempotent
/// against the store.
pub fn plan_membership_action(
    strategy: OwnershipStrategy,
    model: &dyn ObjectModel,
    its: &InstanceSet,
    action_type: ActionType,
    scenario: &str,
    target_ordinal: i32,
    changes: &mut ChangeSet<ActionJob>,
) -> OwnershipResult<ActionJob> {
    let leader = leader_pod_name(&its.status.members_status);
    let target = pod_name(&its.meta.name, target_ordinal);
    let name = action_name(
        &its.meta.name,
        its.meta.generation,
        target_ordinal,
        action_type,
    );
    let action = build_action(its, &name, action_type, scenario, &leader, &target);
    create_action(strategy, model, its, action.clone(), changes)?;
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AccessMode, Credential, CredentialVar, MemberStatus, ReplicaRole, ValueFrom,
        INSTANCE_LABEL_KEY, KIND_INSTANCE_SET, MANAGED_BY_LABEL_KEY,
    };
    use crate::store::{ChangeOp, DefaultObjectModel};
    use uuid::Uuid;

    fn its_fixture() -> InstanceSet {
        let mut its = InstanceSet::named("db");
        its.meta.uid = Some(Uuid::new_v4());
        its.meta.generation = 4;
        its.spec.service_port = Some(5432);
        its.status.members_status = vec![MemberStatus {
            pod_name: "db-0".to_string(),
            role: Some(ReplicaRole {
                name: "leader".to_string(),
                is_leader: true,
                can_vote: true,
                access_mode: AccessMode::ReadWrite,
            }),
            ready: true,
            ready_without_primary: false,
        }];
        its
    }

    #[test]
    fn test_env_names_hosts_through_headless_service() {
        let its = its_fixture();
        let env = build_action_env(&its, "db-0", "db-1");
        assert_eq!(env.len(), 3);
        assert_eq!(env[0].name, LEADER_HOST_VAR_NAME);
        assert_eq!(env[0].value.as_deref(), Some("db-0.db-headless"));
        assert_eq!(env[1].name, SERVICE_PORT_VAR_NAME);
        assert_eq!(env[1].value.as_deref(), Some("5432"));
        assert_eq!(env[2].name, TARGET_HOST_VAR_NAME);
        assert_eq!(env[2].value.as_deref(), Some("db-1.db-headless"));
    }

    #[test]
    fn test_env_port_defaults_to_zero() {
        let mut its = its_fixture();
        its.spec.service_port = None;
        let env = build_action_env(&its, "db-0", "db-1");
        assert_eq!(env[1].value.as_deref(), Some("0"));
    }

    #[test]
    fn test_build_action_shape_and_labels() {
        let its = its_fixture();
        let action = build_action(
            &its,
            "db-4-1-promote",
            ActionType::Promote,
            "update",
            "db-0",
            "db-1",
        );

        assert_eq!(action.meta.name, "db-4-1-promote");
        assert!(!action.suspend);
        assert_eq!(action.template.restart_policy, RestartPolicy::OnFailure);
        assert_eq!(action.template.containers.len(), 1);
        assert_eq!(action.template.containers[0].name, "promote");
        assert_eq!(
            action.template.containers[0].image_pull_policy,
            ImagePullPolicy::IfNotPresent
        );

        let labels = &action.meta.labels;
        assert_eq!(labels[MANAGED_BY_LABEL_KEY], KIND_INSTANCE_SET);
        assert_eq!(labels[INSTANCE_LABEL_KEY], "db");
        assert_eq!(labels[JOB_SCENARIO_LABEL_KEY], "update");
        assert_eq!(labels[JOB_TYPE_LABEL_KEY], "promote");
        assert_eq!(labels[JOB_HANDLED_LABEL_KEY], JOB_HANDLED_FALSE);
    }

    #[test]
    fn test_credential_mirrored_verbatim() {
        let mut its = its_fixture();
        its.spec.credential = Some(Credential {
            username: CredentialVar {
                value: Some("admin".to_string()),
                value_from: None,
            },
            password: CredentialVar {
                value: None,
                value_from: Some(ValueFrom {
                    source: "db-secret".to_string(),
                    key: "password".to_string(),
                }),
            },
        });

        let action = build_action(&its, "n", ActionType::Switchover, "s", "db-0", "db-1");
        let env = &action.template.containers[0].env;
        let username = env.iter().find(|e| e.name == USERNAME_CREDENTIAL_VAR_NAME).unwrap();
        assert_eq!(username.value.as_deref(), Some("admin"));
        assert!(username.value_from.is_none());

        let password = env.iter().find(|e| e.name == PASSWORD_CREDENTIAL_VAR_NAME).unwrap();
        assert!(password.value.is_none());
        assert_eq!(
            password.value_from.as_ref().map(|v| v.source.as_str()),
            Some("db-secret")
        );
    }

    #[test]
    fn test_no_credential_no_credential_env() {
        let its = its_fixture();
        let action = build_action(&its, "n", ActionType::Switchover, "s", "db-0", "db-1");
        let env = &action.template.containers[0].env;
        assert!(env.iter().all(|e| e.name != USERNAME_CREDENTIAL_VAR_NAME));
        assert!(env.iter().all(|e| e.name != PASSWORD_CREDENTIAL_VAR_NAME));
    }

    #[test]
    fn test_plan_stages_owned_create() {
        let its = its_fixture();
        let mut changes = ChangeSet::new();
        let action = plan_membership_action(
            OwnershipStrategy::Direct,
            &DefaultObjectModel,
            &its,
            ActionType::Switchover,
            "update",
            1,
            &mut changes,
        )
        .unwrap();

        assert_eq!(action.meta.name, "db-4-1-switchover");
        assert_eq!(changes.len(), 1);
        let ChangeOp::Create(staged) = &changes.ops()[0] else {
            panic!("expected a staged create");
        };
        assert_eq!(staged.meta.name, "db-4-1-switchover");
        assert!(staged.meta.controller_ref().is_some());
        // env targets leader db-0 and target db-1
        let env = &staged.template.containers[0].env;
        assert_eq!(env[0].value.as_deref(), Some("db-0.db-headless"));
        assert_eq!(env[2].value.as_deref(), Some("db-1.db-headless"));
    }

    #[test]
    fn test_plan_is_deterministic_per_tuple() {
        let its = its_fixture();
        let mut changes = ChangeSet::new();
        let model = DefaultObjectModel;
        let first = plan_membership_action(
            OwnershipStrategy::Direct,
            &model,
            &its,
            ActionType::Promote,
            "update",
            2,
            &mut changes,
        )
        .unwrap();
        let second = plan_membership_action(
            OwnershipStrategy::Direct,
            &model,
            &its,
            ActionType::Promote,
            "update",
            2,
            &mut changes,
        )
        .unwrap();
        assert_eq!(first.meta.name, second.meta.name);
    }
}
