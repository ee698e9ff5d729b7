//! The `--validate-config` use case: audit an agents directory.

use crate::engine::ComplianceEngine;
use crate::report::build_report;
use anyhow::Context;
use camino::Utf8Path;
use mcpguard_types::{AuditReport, Verdict};
use std::collections::BTreeMap;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    pub agents_dir: &'a Utf8Path,
}

#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub verdicts: BTreeMap<String, Verdict>,
    /// Console listing: one line per agent plus the summary line.
    pub rendered: String,
    pub report: AuditReport,
}

impl AuditOutput {
    /// 0 when every agent passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.report.summary.all_passed() { 0 } else { 1 }
    }
}

pub fn run_audit(engine: &ComplianceEngine, input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let started_at = OffsetDateTime::now_utc();

    let verdicts = engine
        .audit_directory(input.agents_dir)
        .with_context(|| format!("audit {}", input.agents_dir))?;

    let rendered = mcpguard_render::render_audit(verdicts.values());
    let report = build_report(started_at, engine.policy(), verdicts.values().cloned().collect());

    Ok(AuditOutput {
        verdicts,
        rendered,
        report,
    })
}
