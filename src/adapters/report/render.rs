//! Report rendering - turns a run report into sink lines.

use crate::domain::concern::RunReport;
use crate::ports::ReportSink;

/// Renders a run report through the given sink, one concern at a time.
pub fn render_report(report: &RunReport, sink: &dyn ReportSink) {
    sink.writeline(&format!(
        "Decision report generated at {}",
        report.generated_at.to_rfc3339()
    ));

    for (index, concern) in report.concerns.iter().enumerate() {
        sink.blank();
        sink.writeline(&format!("== Concern {} ==", index + 1));

        if concern.conditions.is_empty() {
            sink.writeline("Holds unconditionally.");
        } else {
            sink.writeline("Holds when:");
            for condition in &concern.conditions {
                sink.writeline(&format!("  - {condition}"));
            }
        }

        let mut weights: Vec<_> = concern.desired_qualities.iter().collect();
        weights.sort_by(|a, b| a.0.cmp(b.0));
        let summary = weights
            .iter()
            .map(|(attr, weight)| format!("{attr} {weight}"))
            .collect::<Vec<_>>()
            .join(", ");
        sink.writeline(&format!("Desired qualities: {summary}"));

        if !concern.is_decided() {
            sink.writeline("No optimal solution found for this concern.");
            continue;
        }

        sink.writeline(&format!("Decisions (total score {}):", concern.total_score()));
        for decision in &concern.decisions {
            sink.writeline(&format!(
                "  {} -> {} (score {})",
                decision.category, decision.pattern, decision.score
            ));
            for (attr, contribution) in &decision.satisfied {
                sink.writeline(&format!("    + {attr} {contribution}"));
            }
            for (attr, contribution) in &decision.unsatisfied {
                sink.writeline(&format!("    - {attr} {contribution}"));
            }
        }
    }
}
