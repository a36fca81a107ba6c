//! Structured JSON Logger
//!
//! One log line = one event. Lines are emitted synchronously, unbuffered,
//! with deterministic key ordering: `component`, `event`, `severity`
//! first, then fields sorted alphabetically. Serialization goes through
//! serde_json so escaping is never hand-rolled.

use std::io::{self, Write};

use serde_json::{Map, Value};

/// Log severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// A component-scoped structured logger.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    component: &'static str,
}

impl Logger {
    /// Logger for one component; the component name appears on every
    /// line.
    pub fn new(component: &'static str) -> Self {
        Self { component }
    }

    pub fn debug(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Debug, event, fields);
    }

    pub fn info(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    pub fn warn(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    pub fn error(&self, event: &str, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }

    /// Emit one line; errors and above go to stderr.
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = self.render(severity, event, fields);
        if severity >= Severity::Error {
            let _ = writeln!(io::stderr(), "{}", line);
        } else {
            let _ = writeln!(io::stdout(), "{}", line);
        }
    }

    fn render(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut map = Map::new();
        map.insert(
            "component".to_string(),
            Value::String(self.component.to_string()),
        );
        map.insert("event".to_string(), Value::String(event.to_string()));
        map.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );

        let mut sorted: Vec<_> = fields.to_vec();
        sorted.sort_by_key(|(k, _)| *k);
        for (key, value) in sorted {
            map.insert(key.to_string(), Value::String(value.to_string()));
        }

        Value::Object(map).to_string()
    }
}
