//! memberset - a strict, deterministic membership-management core
//!
//! Manages the runtime membership state of a role-aware, ordinal-indexed
//! replica set: role priority ranking, group readiness evaluation,
//! out-of-band membership action jobs, and ownership reconciliation of
//! generated objects.
//!
//! Everything here is synchronous and side-effect free over its explicit
//! inputs. Object mutations are staged into a caller-supplied change set;
//! the apply phase, the reconciliation scheduler, and the object store
//! transport are external collaborators consumed through the seams in
//! [`store`].

pub mod actions;
pub mod membership;
pub mod model;
pub mod observability;
pub mod ownership;
pub mod readiness;
pub mod store;
