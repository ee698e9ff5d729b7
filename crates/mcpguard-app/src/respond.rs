//! The `--check-response` use case: enforce the policy on one agent response.

use crate::engine::ComplianceEngine;
use crate::report::build_report;
use anyhow::Context;
use camino::Utf8Path;
use mcpguard_domain::Decision;
use mcpguard_types::AuditReport;
use time::OffsetDateTime;

#[derive(Clone, Debug)]
pub struct ResponseInput<'a> {
    pub path: &'a Utf8Path,
    /// Subject name; defaults to the file stem.
    pub subject: Option<&'a str>,
}

#[derive(Clone, Debug)]
pub struct ResponseOutput {
    pub decision: Decision,
    pub report: AuditReport,
}

impl ResponseOutput {
    /// 0 when the response is allowed, 1 when it is blocked.
    pub fn exit_code(&self) -> i32 {
        if self.decision.allowed { 0 } else { 1 }
    }
}

pub fn run_response_check(
    engine: &mut ComplianceEngine,
    input: ResponseInput<'_>,
) -> anyhow::Result<ResponseOutput> {
    let started_at = OffsetDateTime::now_utc();

    let text = mcpguard_repo::read_document(input.path)
        .with_context(|| format!("read response {}", input.path))?;
    let subject = input
        .subject
        .map(str::to_string)
        .unwrap_or_else(|| mcpguard_repo::subject_name(input.path));

    let policy = engine.policy();
    let decision = engine.decide(&subject, &text, policy);
    tracing::debug!(
        subject = %subject,
        policy = policy.as_str(),
        passed = decision.verdict.passed,
        allowed = decision.allowed,
        "response checked"
    );

    let report = build_report(started_at, policy, vec![decision.verdict.clone()]);
    Ok(ResponseOutput { decision, report })
}
