//! Observability
//!
//! Structured logging and event recording for the membership core. Logs
//! are synchronous JSON lines with deterministic field ordering; events
//! mirror what the surrounding controller publishes about action jobs.

mod events;
mod logger;

pub use events::{EventRecord, EventRecorder, EventType, MemoryEventRecorder};
pub use logger::{Logger, Severity};
