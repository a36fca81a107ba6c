//! Staged Changes
//!
//! Object mutations are staged, not applied: each operation records the
//! full intended object (and for updates the old value too, so the apply
//! phase can diff). Application order, retries, and backoff belong to the
//! external apply phase.

/// One staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOp<T> {
    Create(T),
    Update { old: T, new: T },
}

/// An ordered list of staged mutations for one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet<T> {
    ops: Vec<ChangeOp<T>>,
}

impl<T> ChangeSet<T> {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Stage a create.
    pub fn create(&mut self, obj: T) {
        self.ops.push(ChangeOp::Create(obj));
    }

    /// Stage an old → new update.
    pub fn update(&mut self, old: T, new: T) {
        self.ops.push(ChangeOp::Update { old, new });
    }

    pub fn ops(&self) -> &[ChangeOp<T>] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Hand the staged operations to the apply phase.
    pub fn into_ops(self) -> Vec<ChangeOp<T>> {
        self.ops
    }
}
