//! The compliance engine: rule set, enforcement policy and ledger in one owned value.

use camino::Utf8Path;
use mcpguard_domain::{ComplianceLedger, Decision, EnforcementPolicy, RuleSet};
use mcpguard_repo::DocumentFilter;
use mcpguard_settings::ResolvedConfig;
use mcpguard_types::Verdict;
use std::collections::BTreeMap;

/// Runs compliance checks and keeps the ledger of response verdicts.
///
/// The ledger lives exactly as long as the engine. Methods that record take `&mut self`, so a
/// host that shares an engine across threads has to wrap it in its own lock.
#[derive(Clone, Debug)]
pub struct ComplianceEngine {
    rules: RuleSet,
    policy: EnforcementPolicy,
    filter: DocumentFilter,
    ledger: ComplianceLedger,
}

impl ComplianceEngine {
    pub fn new(rules: RuleSet, policy: EnforcementPolicy, filter: DocumentFilter) -> Self {
        Self {
            rules,
            policy,
            filter,
            ledger: ComplianceLedger::new(),
        }
    }

    pub fn from_resolved(resolved: ResolvedConfig) -> anyhow::Result<Self> {
        let filter = DocumentFilter::new(&resolved.document_glob, &resolved.reserved)?;
        Ok(Self::new(resolved.rules, resolved.enforcement, filter))
    }

    pub fn policy(&self) -> EnforcementPolicy {
        self.policy
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn ledger(&self) -> &ComplianceLedger {
        &self.ledger
    }

    /// Pattern-based check of a response. The verdict is recorded in the ledger.
    pub fn check_text(&mut self, subject: &str, text: &str) -> Verdict {
        let verdict = mcpguard_domain::check_text(&self.rules, subject, text);
        self.ledger.record(verdict.clone());
        verdict
    }

    /// Name-based check of an agent definition file. Read failures become failing verdicts.
    pub fn check_structured_document(&self, path: &Utf8Path) -> Verdict {
        self.check_document_as(path, &mcpguard_repo::subject_name(path))
    }

    fn check_document_as(&self, path: &Utf8Path, subject: &str) -> Verdict {
        match mcpguard_repo::read_document(path) {
            Ok(text) => mcpguard_domain::check_config_document(&self.rules, subject, &text),
            Err(err) => {
                tracing::warn!(path = %path, error = %err, "agent document not readable");
                mcpguard_domain::unreadable_verdict(&self.rules, subject, &err.to_string())
            }
        }
    }

    /// Check `text` (recording it) and apply `policy`.
    pub fn decide(&mut self, subject: &str, text: &str, policy: EnforcementPolicy) -> Decision {
        mcpguard_domain::decide(&self.rules, &mut self.ledger, subject, text, policy)
    }

    pub fn remediate(&self, text: &str) -> String {
        mcpguard_domain::remediate(&self.rules, text)
    }

    /// Check every agent definition directly inside `dir`, keyed by subject name.
    ///
    /// Documents sharing a file stem keep separate entries: the first keeps the stem, later
    /// ones are keyed by their full file name (or path, if that is taken too).
    pub fn audit_directory(&self, dir: &Utf8Path) -> anyhow::Result<BTreeMap<String, Verdict>> {
        let documents = mcpguard_repo::discover_documents(dir, &self.filter)?;
        let mut out = BTreeMap::new();
        for path in documents {
            let mut subject = mcpguard_repo::subject_name(&path);
            if out.contains_key(&subject) {
                let file_name = path.file_name().unwrap_or(path.as_str()).to_string();
                let renamed = if out.contains_key(&file_name) {
                    path.to_string()
                } else {
                    file_name
                };
                tracing::warn!(
                    path = %path,
                    subject = %subject,
                    renamed = %renamed,
                    "subject name collision"
                );
                subject = renamed;
            }
            let verdict = self.check_document_as(&path, &subject);
            tracing::debug!(subject = %verdict.subject, passed = verdict.passed, "audited agent");
            out.insert(verdict.subject.clone(), verdict);
        }
        Ok(out)
    }

    /// Report over every verdict recorded so far.
    pub fn summarize(&self) -> String {
        mcpguard_render::render_summary(self.ledger.verdicts(), self.policy.as_str())
    }
}
