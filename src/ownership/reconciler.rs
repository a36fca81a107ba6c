//! Ownership Reconciler
//!
//! Two strategies, selected by a caller-owned feature flag:
//!
//! - **Direct**: delegate to the external object model's generic
//!   owner-reference + finalizer setter.
//! - **Compatibility**: copy the owner's *controller* references onto the
//!   target, merging by object identity.
//!
//! Two references denote the same object when API group, kind, and name
//! match; the version is ignored, which tolerates API version skew across
//! the same resource identity. A malformed API version parses to "no
//! match" instead of an error.

use crate::model::{MetaObject, ObjectMeta, OwnerReference, KIND_INSTANCE_SET, KIND_VOLUME_CLAIM};
use crate::store::ObjectModel;

use super::errors::{OwnershipError, OwnershipResult};

/// API version stamped on controller references this core creates.
const API_VERSION: &str = "workloads.memberset.io/v1";

/// How ownership is attached to generated objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipStrategy {
    /// Delegate to the object model's generic setter
    Direct,
    /// Copy the owner's controller references (legacy-compatible merge)
    Compatibility,
}

/// Attach `owner`'s ownership to `obj` using the selected strategy.
pub fn set_ownership(
    strategy: OwnershipStrategy,
    model: &dyn ObjectModel,
    owner: &dyn MetaObject,
    obj: &mut dyn MetaObject,
    finalizer: &str,
) -> OwnershipResult<()> {
    match strategy {
        OwnershipStrategy::Direct => model.set_ownership(owner, obj, finalizer),
        OwnershipStrategy::Compatibility => copy_ownership(owner, obj, finalizer),
    }
}

/// API group of an `apiVersion` string: `group/version` or bare
/// `version` (empty group). More than one slash is malformed and yields
/// `None`, which identity comparison treats as "no match".
fn parse_api_group(api_version: &str) -> Option<&str> {
    let mut parts = api_version.split('/');
    let first = parts.next().unwrap_or("");
    match (parts.next(), parts.next()) {
        (None, _) => Some(""),
        (Some(_), None) => Some(first),
        _ => None,
    }
}

/// Whether two owner references point at the same object: same API
/// group (version-insensitive), kind, and name.
pub fn refer_same_object(a: &OwnerReference, b: &OwnerReference) -> bool {
    let (Some(group_a), Some(group_b)) = (parse_api_group(&a.api_version), parse_api_group(&b.api_version))
    else {
        return false;
    };
    group_a == group_b && a.kind == b.kind && a.name == b.name
}

/// Replace the matching owner reference or append a new one.
pub fn upsert_owner_ref(owner_ref: OwnerReference, meta: &mut ObjectMeta) {
    match meta
        .owner_references
        .iter()
        .position(|r| refer_same_object(r, &owner_ref))
    {
        Some(index) => meta.owner_references[index] = owner_ref,
        None => meta.owner_references.push(owner_ref),
    }
}

/// A controller reference denoting `owner`.
pub fn controller_reference(owner: &dyn MetaObject) -> OwnerReference {
    OwnerReference {
        api_version: API_VERSION.to_string(),
        kind: owner.kind().to_string(),
        name: owner.meta().name.clone(),
        uid: owner.meta().uid.unwrap_or_default(),
        controller: true,
    }
}

/// Register `finalizer` on `obj` unless it is a storage claim (claims
/// must survive independently of the controller's deletion lifecycle).
///
/// A terminating object can no longer record finalizers; that is the
/// distinct [`OwnershipErrorKind::FinalizerAddFailed`] case.
///
/// [`OwnershipErrorKind::FinalizerAddFailed`]: super::OwnershipErrorKind::FinalizerAddFailed
pub fn ensure_finalizer(obj: &mut dyn MetaObject, finalizer: &str) -> OwnershipResult<()> {
    if obj.meta().has_finalizer(finalizer) {
        return Ok(());
    }
    if obj.kind() == KIND_VOLUME_CLAIM {
        return Ok(());
    }
    if obj.meta().is_terminating() {
        return Err(OwnershipError::finalizer_add_failed(obj));
    }
    obj.meta_mut().finalizers.push(finalizer.to_string());
    Ok(())
}

/// Copy `owner`'s controller references onto `obj` and register the
/// finalizer.
///
/// For each controller reference on the owner: if `obj` is already
/// controlled by a *different* object, fail with the conflict error and
/// leave `obj`'s references untouched; otherwise upsert.
pub fn copy_ownership(
    owner: &dyn MetaObject,
    obj: &mut dyn MetaObject,
    finalizer: &str,
) -> OwnershipResult<()> {
    let owner_refs = owner.meta().owner_references.clone();
    for owner_ref in owner_refs {
        if !owner_ref.controller {
            continue;
        }
        if let Some(existing) = obj.meta().controller_ref() {
            if !refer_same_object(existing, &owner_ref) {
                return Err(OwnershipError::already_owned(obj, existing.clone()));
            }
        }
        upsert_owner_ref(owner_ref, obj.meta_mut());
    }

    ensure_finalizer(obj, finalizer)
}

/// Whether `obj` is controlled by an InstanceSet.
pub fn is_owned_by_instance_set(obj: &dyn MetaObject) -> bool {
    obj.meta()
        .owner_references
        .iter()
        .any(|r| r.kind == KIND_INSTANCE_SET && r.controller)
}
