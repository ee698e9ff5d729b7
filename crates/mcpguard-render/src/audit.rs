use crate::status;
use mcpguard_types::{AuditSummary, Verdict};

/// Render the per-agent result of a configuration audit followed by the summary line.
pub fn render_audit<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> String {
    let mut out = String::new();
    out.push_str("AGENT CONFIGURATION VALIDATION\n");
    out.push_str(&"=".repeat(50));
    out.push('\n');

    let mut summary = AuditSummary::default();
    for v in verdicts {
        summary.total += 1;
        if v.passed {
            summary.passed += 1;
        }

        out.push_str(&format!("{}: {}\n", v.subject, status(v.passed)));
        for e in &v.errors {
            out.push_str(&format!("  ERROR: {}\n", e));
        }
        for w in &v.warnings {
            out.push_str(&format!("  WARNING: {}\n", w));
        }
    }

    out.push_str(&format!(
        "\nSummary: {}/{} agents configured correctly ({:.1}%)\n",
        summary.passed,
        summary.total,
        summary.pass_percentage()
    ));
    out
}
