//! Membership Action Orchestration
//!
//! Membership transitions (promote, switchover, member-join,
//! member-leave, log-sync) run as out-of-band action jobs rather than in
//! the reconciliation path. This module builds those jobs, deduplicates
//! them through deterministic naming plus the handled label, and retires
//! them after completion.
//!
//! Idempotency rests on two legs:
//! - the action name is a content address over (parent, generation,
//!   ordinal, type), so re-building the same transition yields the same
//!   create;
//! - listing filters on `handled = "false"`, so a completed action is
//!   never re-processed.

mod build;
mod lifecycle;
mod policy;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use build::{build_action, build_action_env, create_action, plan_membership_action};
pub use lifecycle::{
    emit_action_abnormal_event, handle_action_completion, list_actions, mark_action_handled,
};
pub use policy::{action_args, action_command, resolve_action_image, IMAGE_FALLBACK_CHAIN};

/// The membership action toolset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Switchover,
    MemberJoin,
    MemberLeave,
    LogSync,
    Promote,
}

impl ActionType {
    /// Stable string used in job names and labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Switchover => "switchover",
            ActionType::MemberJoin => "member-join",
            ActionType::MemberLeave => "member-leave",
            ActionType::LogSync => "log-sync",
            ActionType::Promote => "promote",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
