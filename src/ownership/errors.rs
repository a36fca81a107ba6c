//! Ownership Error Types
//!
//! An ownership conflict is never silently resolved: the error carries
//! both the conflicting object and the existing owner identity so the
//! caller can decide.

use std::fmt;

use crate::model::{MetaObject, OwnerReference};

/// Ownership error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipErrorKind {
    /// The object is already controlled by a different owner
    AlreadyOwned,

    /// The cleanup finalizer could not be registered; the object may be
    /// deletable without the controller's cleanup guarantee
    FinalizerAddFailed,
}

/// Ownership error with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnershipError {
    /// Error kind
    pub kind: OwnershipErrorKind,
    /// Kind of the object being adopted
    pub object_kind: String,
    /// Name of the object being adopted
    pub object_name: String,
    /// The existing controlling owner, for conflicts
    pub existing_owner: Option<OwnerReference>,
}

impl OwnershipError {
    /// Create an already-owned conflict error.
    pub fn already_owned(obj: &dyn MetaObject, existing: OwnerReference) -> Self {
        Self {
            kind: OwnershipErrorKind::AlreadyOwned,
            object_kind: obj.kind().to_string(),
            object_name: obj.meta().name.clone(),
            existing_owner: Some(existing),
        }
    }

    /// Create a finalizer-add failure error.
    pub fn finalizer_add_failed(obj: &dyn MetaObject) -> Self {
        Self {
            kind: OwnershipErrorKind::FinalizerAddFailed,
            object_kind: obj.kind().to_string(),
            object_name: obj.meta().name.clone(),
            existing_owner: None,
        }
    }
}

impl fmt::Display for OwnershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.existing_owner) {
            (OwnershipErrorKind::AlreadyOwned, Some(owner)) => write!(
                f,
                "OwnershipError(AlreadyOwned): {} {} is already controlled by {} {}",
                self.object_kind, self.object_name, owner.kind, owner.name
            ),
            _ => write!(
                f,
                "OwnershipError({:?}): {} {}",
                self.kind, self.object_kind, self.object_name
            ),
        }
    }
}

impl std::error::Error for OwnershipError {}

/// Result type for ownership operations
pub type OwnershipResult<T> = Result<T, OwnershipError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Pod, KIND_INSTANCE_SET};
    use uuid::Uuid;

    #[test]
    fn test_conflict_error_carries_owner_identity() {
        let pod = Pod::new("db-0");
        let existing = OwnerReference {
            api_version: "workloads/v1".to_string(),
            kind: KIND_INSTANCE_SET.to_string(),
            name: "other".to_string(),
            uid: Uuid::new_v4(),
            controller: true,
        };
        let err = OwnershipError::already_owned(&pod, existing.clone());
        assert_eq!(err.kind, OwnershipErrorKind::AlreadyOwned);
        assert_eq!(err.object_name, "db-0");
        assert_eq!(err.existing_owner, Some(existing));
        assert!(err.to_string().contains("already controlled by"));
    }
}
