use crate::core::report::format_error_line;
use crate::domain::model::ReportKind;
use crate::domain::ports::ReportSink;
use crate::utils::error::ReportError;
use std::io::Write;

/// Reports go to stdout as one block followed by a blank line; failures go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

fn write_block<W: Write>(out: &mut W, text: &str) -> std::io::Result<()> {
    writeln!(out, "{}", text)?;
    out.flush()
}

fn write_error_line<W: Write>(out: &mut W, kind: ReportKind, error: &ReportError) -> std::io::Result<()> {
    writeln!(out, "{}", format_error_line(kind, error))
}

impl ReportSink for ConsoleSink {
    fn write_report(&self, kind: ReportKind, text: &str) {
        // Holding the lock for the whole block keeps concurrent reports from interleaving.
        let mut out = std::io::stdout().lock();
        if let Err(e) = write_block(&mut out, text) {
            tracing::error!("Failed to write {} report to stdout: {}", kind, e);
        }
    }

    fn write_error(&self, kind: ReportKind, error: &ReportError) {
        let mut err = std::io::stderr().lock();
        if let Err(e) = write_error_line(&mut err, kind, error) {
            tracing::error!("Failed to write {} error to stderr: {}", kind, e);
        }
    }
}
