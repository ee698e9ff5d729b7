use anyhow::Context;
use mcpguard_domain::EnforcementPolicy;
use mcpguard_types::{AuditReport, AuditSummary, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

pub fn build_report(
    started_at: OffsetDateTime,
    policy: EnforcementPolicy,
    verdicts: Vec<Verdict>,
) -> AuditReport {
    AuditReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "mcpguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        enforcement: policy.as_str().to_string(),
        summary: AuditSummary::from_verdicts(&verdicts),
        verdicts,
    }
}

pub fn serialize_report(report: &AuditReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}
