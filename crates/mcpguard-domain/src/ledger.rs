use mcpguard_types::{AuditSummary, Verdict};

/// Ordered history of verdicts, owned by whoever runs the checks.
///
/// Nothing resets it implicitly; it lives as long as its owner.
#[derive(Clone, Debug, Default)]
pub struct ComplianceLedger {
    verdicts: Vec<Verdict>,
}

impl ComplianceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: Verdict) {
        self.verdicts.push(verdict);
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    pub fn summary(&self) -> AuditSummary {
        AuditSummary::from_verdicts(&self.verdicts)
    }
}
