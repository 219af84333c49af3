//! Report sink implementations.

use crate::ports::ReportSink;

/// Writes report lines to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReport;

impl ReportSink for ConsoleReport {
    fn writeline(&self, line: &str) {
        println!("{line}");
    }
}

/// Drops every line; useful where reporting is not wanted.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReport;

impl ReportSink for NoopReport {
    fn writeline(&self, _line: &str) {}
}
