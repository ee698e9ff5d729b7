use crate::{mark, status};
use mcpguard_types::{AuditSummary, Verdict};

/// Returned by [`render_summary`] when nothing has been checked yet.
pub const NO_VALIDATIONS: &str = "No compliance validations performed.";

/// Render a ledger as a report: totals, pass rate, then every verdict in ledger order.
pub fn render_summary(verdicts: &[Verdict], enforcement: &str) -> String {
    if verdicts.is_empty() {
        return NO_VALIDATIONS.to_string();
    }

    let summary = AuditSummary::from_verdicts(verdicts);
    let mut out = String::new();

    out.push_str("COMPLIANCE REPORT\n");
    out.push_str("=================\n\n");
    out.push_str(&format!("Total Agents: {}\n", summary.total));
    out.push_str(&format!(
        "Compliant: {}/{} ({:.1}%)\n",
        summary.passed,
        summary.total,
        summary.pass_percentage()
    ));
    out.push_str(&format!(
        "Enforcement Level: {}\n\n",
        enforcement.to_uppercase()
    ));
    out.push_str("## Per-agent detail\n");

    for v in verdicts {
        out.push_str(&format!("\n### {} - {}\n", v.subject, status(v.passed)));
        for g in &v.group_presence {
            out.push_str(&format!("- {}: {}\n", g.label, mark(g.present)));
        }
        if let Some(footer) = v.footer_present {
            out.push_str(&format!("- Report footer: {}\n", mark(footer)));
        }
        if let Some(declared) = v.enforcement_declared {
            out.push_str(&format!("- Enforcement section: {}\n", mark(declared)));
        }
        push_list(&mut out, "Errors", &v.errors);
        push_list(&mut out, "Warnings", &v.warnings);
    }

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("- {}: {}\n", title, items.len()));
    for item in items {
        out.push_str(&format!("  * {}\n", item));
    }
}
