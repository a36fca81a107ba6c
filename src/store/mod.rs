//! External Collaborator Seams
//!
//! The object store transport, the apply phase, and the generic object
//! model live outside this crate. This module defines the narrow
//! interfaces they are consumed through, plus the staging primitives:
//! mutations are recorded into a [`ChangeSet`] and handed back to the
//! caller; nothing here touches the network.

mod change;
mod context;
mod traits;

pub use change::{ChangeOp, ChangeSet};
pub use context::{CancelHandle, OpContext};
pub use traits::{DefaultObjectModel, MemoryStore, ObjectModel, ObjectStore, StoreError, StoreResult};
