//! Event Recording
//!
//! Events are the operator-facing record of action outcomes. The
//! recorder is a seam: the surrounding controller provides the real
//! publisher; tests use [`MemoryEventRecorder`].

/// Event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Normal,
    Warning,
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub event_type: EventType,
    /// Machine-readable reason, upper-cased action type
    pub reason: String,
    pub message: String,
}

/// Sink for controller events.
pub trait EventRecorder {
    fn event(&mut self, event_type: EventType, reason: &str, message: &str);
}

/// In-memory recorder for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventRecorder {
    records: Vec<EventRecord>,
}

impl MemoryEventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }
}

impl EventRecorder for MemoryEventRecorder {
    fn event(&mut self, event_type: EventType, reason: &str, message: &str) {
        self.records.push(EventRecord {
            event_type,
            reason: reason.to_string(),
            message: message.to_string(),
        });
    }
}
