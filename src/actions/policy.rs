//! Action Policy Resolution
//!
//! Command and args come *directly* from the requested action's
//! configured policy; an absent policy means empty. The image instead
//! falls back along a fixed chain so operators can configure one image
//! for the whole toolset while overriding per action.
//!
//! The chain is a data value (an ordered accessor table walked by
//! index), not control flow, so its order is testable on its own.

use crate::model::{default_action_image, ActionSpec, MembershipReconfiguration};

use super::ActionType;

type ActionAccessor = fn(&MembershipReconfiguration) -> Option<&ActionSpec>;

/// Image fallback order. Resolution starts at the requested type's
/// position and walks forward; the built-in default image closes the
/// chain.
pub const IMAGE_FALLBACK_CHAIN: [(ActionType, ActionAccessor); 5] = [
    (ActionType::Promote, |r| r.promote_action.as_ref()),
    (ActionType::LogSync, |r| r.log_sync_action.as_ref()),
    (ActionType::MemberLeave, |r| r.member_leave_action.as_ref()),
    (ActionType::MemberJoin, |r| r.member_join_action.as_ref()),
    (ActionType::Switchover, |r| r.switchover_action.as_ref()),
];

fn action_spec<'a>(
    reconfiguration: Option<&'a MembershipReconfiguration>,
    action_type: ActionType,
) -> Option<&'a ActionSpec> {
    let reconfiguration = reconfiguration?;
    IMAGE_FALLBACK_CHAIN
        .iter()
        .find(|(candidate, _)| *candidate == action_type)
        .and_then(|(_, accessor)| accessor(reconfiguration))
}

/// Container image for `action_type`, following the fallback chain.
pub fn resolve_action_image(
    reconfiguration: Option<&MembershipReconfiguration>,
    action_type: ActionType,
) -> String {
    if let Some(reconfiguration) = reconfiguration {
        let start = IMAGE_FALLBACK_CHAIN
            .iter()
            .position(|(candidate, _)| *candidate == action_type)
            .unwrap_or(0);
        for (_, accessor) in &IMAGE_FALLBACK_CHAIN[start..] {
            if let Some(spec) = accessor(reconfiguration) {
                if !spec.image.is_empty() {
                    return spec.image.clone();
                }
            }
        }
    }
    default_action_image().to_string()
}

/// Command for `action_type`; no fallback, absent policy means empty.
pub fn action_command(
    reconfiguration: Option<&MembershipReconfiguration>,
    action_type: ActionType,
) -> Vec<String> {
    action_spec(reconfiguration, action_type)
        .map(|spec| spec.command.clone())
        .unwrap_or_default()
}

/// Args for `action_type`; no fallback, absent policy means empty.
pub fn action_args(
    reconfiguration: Option<&MembershipReconfiguration>,
    action_type: ActionType,
) -> Vec<String> {
    action_spec(reconfiguration, action_type)
        .map(|spec| spec.args.clone())
        .unwrap_or_default()
}
