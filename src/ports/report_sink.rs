//! Report Sink Port - Line-oriented reporting collaborator.

/// Receives report lines; implementations may print, log, or drop them.
///
/// Writing is infallible by contract so reporting can never fail a pipeline
/// run.
pub trait ReportSink: Send + Sync {
    /// Writes one line to the report.
    fn writeline(&self, line: &str);

    /// Writes an empty separator line.
    fn blank(&self) {
        self.writeline("");
    }
}
