//! Store and Object-Model Traits
//!
//! [`ObjectStore`] is the read seam: one blocking, cancellable list.
//! [`ObjectModel`] is the generic ownership setter the direct strategy
//! delegates to. [`MemoryStore`] is the in-memory double used by tests
//! and simulations.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::{ActionJob, MetaObject};
use crate::ownership::OwnershipResult;

/// Result type for store reads.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store read failures. Propagated unchanged to the caller; no local
/// recovery.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The operation context was cancelled before the read
    #[error("operation cancelled")]
    Cancelled,
    /// The collaborator failed to serve the list
    #[error("list failed: {0}")]
    ListFailed(String),
}

/// Read access to the object store.
pub trait ObjectStore {
    /// List action jobs whose labels contain every `selector` entry.
    fn list_jobs(
        &self,
        ctx: &super::OpContext,
        selector: &BTreeMap<String, String>,
    ) -> StoreResult<Vec<ActionJob>>;
}

/// The external object model's generic owner-reference + finalizer
/// setter, consumed by the direct ownership strategy.
pub trait ObjectModel {
    fn set_ownership(
        &self,
        owner: &dyn MetaObject,
        obj: &mut dyn MetaObject,
        finalizer: &str,
    ) -> OwnershipResult<()>;
}

/// Reference [`ObjectModel`]: makes `owner` the controller of `obj` and
/// registers the finalizer, with the same conflict and storage-claim
/// semantics as the compatibility strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultObjectModel;

impl ObjectModel for DefaultObjectModel {
    fn set_ownership(
        &self,
        owner: &dyn MetaObject,
        obj: &mut dyn MetaObject,
        finalizer: &str,
    ) -> OwnershipResult<()> {
        let owner_ref = crate::ownership::controller_reference(owner);
        if let Some(existing) = obj.meta().controller_ref() {
            if !crate::ownership::refer_same_object(existing, &owner_ref) {
                return Err(crate::ownership::OwnershipError::already_owned(
                    obj,
                    existing.clone(),
                ));
            }
        }
        crate::ownership::upsert_owner_ref(owner_ref, obj.meta_mut());
        crate::ownership::ensure_finalizer(obj, finalizer)
    }
}

/// In-memory job store for tests: a plain list filtered by label
/// selector, with optional injected read failure.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    jobs: Vec<ActionJob>,
    fail_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent list fails with the given message.
    pub fn fail_lists_with(&mut self, message: impl Into<String>) {
        self.fail_with = Some(message.into());
    }

    pub fn insert(&mut self, job: ActionJob) {
        self.jobs.push(job);
    }

    /// Replace the stored job with the same name, mirroring an applied
    /// update.
    pub fn apply_update(&mut self, new: ActionJob) {
        if let Some(slot) = self.jobs.iter_mut().find(|j| j.meta.name == new.meta.name) {
            *slot = new;
        }
    }

    pub fn jobs(&self) -> &[ActionJob] {
        &self.jobs
    }
}

impl ObjectStore for MemoryStore {
    fn list_jobs(
        &self,
        ctx: &super::OpContext,
        selector: &BTreeMap<String, String>,
    ) -> StoreResult<Vec<ActionJob>> {
        if ctx.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if let Some(message) = &self.fail_with {
            return Err(StoreError::ListFailed(message.clone()));
        }
        Ok(self
            .jobs
            .iter()
            .filter(|job| {
                selector
                    .iter()
                    .all(|(k, v)| job.meta.labels.get(k) == Some(v))
            })
            .cloned()
            .collect())
    }
}
