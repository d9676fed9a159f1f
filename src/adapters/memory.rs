use crate::core::report::format_error_line;
use crate::domain::model::ReportKind;
use crate::domain::ports::ReportSink;
use crate::utils::error::ReportError;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEntry {
    Report(ReportKind, String),
    Error(ReportKind, String),
}

/// Records everything written to it, in arrival order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<SinkEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<SinkEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Concatenated report blocks, as they would appear on stdout.
    pub fn stdout(&self) -> String {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                SinkEntry::Report(_, text) => Some(text),
                SinkEntry::Error(..) => None,
            })
            .collect()
    }

    pub fn stderr_lines(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|entry| match entry {
                SinkEntry::Error(_, line) => Some(line),
                SinkEntry::Report(..) => None,
            })
            .collect()
    }

    pub fn report_for(&self, kind: ReportKind) -> Option<String> {
        self.entries().into_iter().find_map(|entry| match entry {
            SinkEntry::Report(k, text) if k == kind => Some(text),
            _ => None,
        })
    }

    fn push(&self, entry: SinkEntry) {
        match self.entries.lock() {
            Ok(mut entries) => entries.push(entry),
            Err(poisoned) => poisoned.into_inner().push(entry),
        }
    }
}

impl ReportSink for MemorySink {
    fn write_report(&self, kind: ReportKind, text: &str) {
        self.push(SinkEntry::Report(kind, text.to_string()));
    }

    fn write_error(&self, kind: ReportKind, error: &ReportError) {
        self.push(SinkEntry::Error(kind, format_error_line(kind, error)));
    }
}
