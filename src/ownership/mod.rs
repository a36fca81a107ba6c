//! Ownership Reconciliation
//!
//! Attaches generated objects to their owning workload without
//! clobbering concurrent controllers: at most one controller reference
//! per object, conflicts are structured errors rather than overwrites,
//! and the cleanup finalizer is registered on everything except storage
//! claims.

mod errors;
mod reconciler;

pub use errors::{OwnershipError, OwnershipErrorKind, OwnershipResult};
pub use reconciler::{
    controller_reference, copy_ownership, ensure_finalizer, is_owned_by_instance_set,
    refer_same_object, set_ownership, upsert_owner_ref, OwnershipStrategy,
};
