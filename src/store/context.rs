//! Operation Context
//!
//! Cancellation is cooperative: the caller holds a [`CancelHandle`] and
//! the one blocking read checks the context before touching the store.
//! No operation here retries or times out internally; the caller retries
//! a failed reconciliation pass as a whole.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Context threaded through store reads.
#[derive(Debug, Clone, Default)]
pub struct OpContext {
    cancelled: Arc<AtomicBool>,
}

/// Handle that cancels the associated [`OpContext`].
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl OpContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle the caller can use to cancel this context.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            cancelled: Arc::clone(&self.cancelled),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}
