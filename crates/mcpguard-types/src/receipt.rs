use crate::Verdict;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for mcpguard reports.
pub const SCHEMA_REPORT_V1: &str = "mcpguard.report.v1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditSummary {
    pub total: u32,
    pub passed: u32,
}

impl AuditSummary {
    pub fn from_verdicts<'a>(verdicts: impl IntoIterator<Item = &'a Verdict>) -> Self {
        let mut summary = AuditSummary::default();
        for v in verdicts {
            summary.total += 1;
            if v.passed {
                summary.passed += 1;
            }
        }
        summary
    }

    /// Share of passing subjects in percent; `0.0` when nothing was checked.
    pub fn pass_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.passed) * 100.0 / f64::from(self.total)
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Report envelope written as JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Enforcement policy in its CLI spelling (`warning`, `blocking`, `auto-injection`).
    pub enforcement: String,
    pub summary: AuditSummary,
    pub verdicts: Vec<Verdict>,
}
