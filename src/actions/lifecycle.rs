//! Action Lifecycle
//!
//! Listing, completion events, and retirement. Completed actions are not
//! deleted: the handled label flips to `"true"` via a copy-then-diff
//! update, which preserves history and keeps the job out of every future
//! listing. The flip is monotonic; nothing sets it back.

use std::collections::BTreeMap;

use crate::model::{
    match_labels, ActionJob, InstanceSet, JOB_HANDLED_FALSE, JOB_HANDLED_LABEL_KEY,
    JOB_HANDLED_TRUE, JOB_SCENARIO_LABEL_KEY, JOB_TYPE_LABEL_KEY,
};
use crate::observability::{EventRecorder, EventType, Logger};
use crate::store::{ChangeSet, ObjectStore, OpContext, StoreResult};

fn action_selector(its: &InstanceSet, scenario: &str) -> BTreeMap<String, String> {
    let mut labels = match_labels(&its.meta.name);
    labels.insert(JOB_SCENARIO_LABEL_KEY.to_string(), scenario.to_string());
    labels.insert(
        JOB_HANDLED_LABEL_KEY.to_string(),
        JOB_HANDLED_FALSE.to_string(),
    );
    labels
}

/// List the unhandled action jobs of one scenario.
///
/// Jobs already marked handled are excluded; this is the dedup mechanism
/// preventing re-submission for a scenario already completed or in
/// flight. Read failures propagate unchanged.
pub fn list_actions(
    ctx: &OpContext,
    store: &dyn ObjectStore,
    its: &InstanceSet,
    scenario: &str,
) -> StoreResult<Vec<ActionJob>> {
    let actions = store.list_jobs(ctx, &action_selector(its, scenario))?;

    let names: Vec<&str> = actions.iter().map(|a| a.meta.name.as_str()).collect();
    Logger::new("actions").debug(
        "ACTION_LIST",
        &[
            ("instance", &its.meta.name),
            ("scenario", scenario),
            ("actions", &names.join(",")),
        ],
    );
    Ok(actions)
}

/// Pure copy-then-diff transform marking an action handled.
///
/// Returns the (old, new) pair for the staging layer; the input is left
/// untouched.
pub fn mark_action_handled(action: &ActionJob) -> (ActionJob, ActionJob) {
    let old = action.clone();
    let mut new = old.clone();
    new.meta.labels.insert(
        JOB_HANDLED_LABEL_KEY.to_string(),
        JOB_HANDLED_TRUE.to_string(),
    );
    (old, new)
}

fn action_type_label(action: &ActionJob) -> &str {
    action
        .meta
        .labels
        .get(JOB_TYPE_LABEL_KEY)
        .map(String::as_str)
        .unwrap_or_default()
}

fn emit_action_event(
    recorder: &mut dyn EventRecorder,
    event_type: EventType,
    action_type: &str,
    message: &str,
) {
    recorder.event(event_type, &action_type.to_uppercase(), message);
}

fn emit_action_succeed_event(recorder: &mut dyn EventRecorder, action: &ActionJob) {
    let action_type = action_type_label(action);
    let message = format!("{} succeed, job name: {}", action_type, action.meta.name);
    emit_action_event(recorder, EventType::Normal, action_type, &message);
}

fn emit_action_failed_event(recorder: &mut dyn EventRecorder, action: &ActionJob) {
    let action_type = action_type_label(action);
    let message = format!("{} failed, job name: {}", action_type, action.meta.name);
    emit_action_event(recorder, EventType::Warning, action_type, &message);
}

/// Report a generic execution error for an action (e.g. the job could
/// not be processed at all).
pub fn emit_action_abnormal_event(
    recorder: &mut dyn EventRecorder,
    action: &ActionJob,
    error: &dyn std::error::Error,
) {
    let action_type = action_type_label(action);
    let message = format!("{}, job name: {}", error, action.meta.name);
    emit_action_event(recorder, EventType::Warning, action_type, &message);
}

/// Post-process a finished action: emit the outcome event, then stage
/// the handled flip so the job never re-enters a listing.
///
/// Actions with neither terminal counter set are still running and are
/// left alone.
pub fn handle_action_completion(
    recorder: &mut dyn EventRecorder,
    changes: &mut ChangeSet<ActionJob>,
    action: &ActionJob,
) {
    if action.status.succeeded > 0 {
        emit_action_succeed_event(recorder, action);
    } else if action.status.failed > 0 {
        emit_action_failed_event(recorder, action);
    } else {
        return;
    }

    let (old, new) = mark_action_handled(action);
    changes.update(old, new);
}
