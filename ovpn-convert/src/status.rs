//! Parse status accumulation: error/warning counters and messages.

use serde::Serialize;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One diagnostic attached to the run, optionally to a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    #[serde(rename = "type")]
    pub severity: Severity,
    /// 1-based input line; omitted for diagnostics with no associated
    /// line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    pub message: String,
}

/// Accumulated diagnostics for one parse run.
///
/// Counters are plain fields, bumped as messages are recorded and
/// only turned into JSON at serialization time. The report grows
/// monotonically; nothing is ever removed during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub errors: u32,
    pub warnings: u32,
    pub messages: Vec<StatusMessage>,
}

impl StatusReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error. Line number 0 means "no associated line".
    pub fn error(&mut self, line: u32, message: impl Into<String>) {
        self.errors += 1;
        self.push(Severity::Error, line, message.into());
    }

    /// Record a warning. Line number 0 means "no associated line".
    pub fn warning(&mut self, line: u32, message: impl Into<String>) {
        self.warnings += 1;
        self.push(Severity::Warning, line, message.into());
    }

    fn push(&mut self, severity: Severity, line: u32, message: String) {
        self.messages.push(StatusMessage {
            severity,
            line: (line > 0).then_some(line),
            message,
        });
    }
}
