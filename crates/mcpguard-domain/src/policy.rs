use crate::engine::check_text;
use crate::ledger::ComplianceLedger;
use crate::model::RuleSet;
use crate::remediate::remediate;
use mcpguard_types::Verdict;

/// What to do with a response that fails the compliance check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnforcementPolicy {
    /// Allow, but report what is missing.
    Warn,
    /// Refuse the response until every marker is present.
    Block,
    /// Allow, after injecting the missing markers.
    AutoRemediate,
}

impl EnforcementPolicy {
    pub const ALL: [EnforcementPolicy; 3] = [
        EnforcementPolicy::Warn,
        EnforcementPolicy::Block,
        EnforcementPolicy::AutoRemediate,
    ];

    /// CLI / config spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            EnforcementPolicy::Warn => "warning",
            EnforcementPolicy::Block => "blocking",
            EnforcementPolicy::AutoRemediate => "auto-injection",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub allowed: bool,
    /// Summary for `Warn`/`Block`; the (possibly remediated) text for `AutoRemediate`.
    pub message: String,
    pub verdict: Verdict,
}

/// Check `text`, record the verdict, and apply `policy`.
pub fn decide(
    rules: &RuleSet,
    ledger: &mut ComplianceLedger,
    subject: &str,
    text: &str,
    policy: EnforcementPolicy,
) -> Decision {
    let verdict = check_text(rules, subject, text);
    ledger.record(verdict.clone());

    let (allowed, message) = match policy {
        EnforcementPolicy::Warn => {
            if verdict.passed {
                (true, format!("{subject} compliance validated"))
            } else {
                let mut msg = format!("WARNING: {subject} marker usage incomplete");
                push_items(&mut msg, &verdict.errors);
                (true, msg)
            }
        }
        EnforcementPolicy::Block => {
            if verdict.passed {
                (true, format!("{subject} compliance validated"))
            } else {
                let mut msg =
                    format!("BLOCKED: {subject} must use every required marker group");
                push_items(&mut msg, &verdict.errors);
                msg.push_str(
                    "\n\nRequired markers must be present before the response is accepted. \
                     Retry with the required invocations.",
                );
                (false, msg)
            }
        }
        EnforcementPolicy::AutoRemediate => {
            if verdict.passed {
                (true, text.to_string())
            } else {
                (true, remediate(rules, text))
            }
        }
    };

    Decision {
        allowed,
        message,
        verdict,
    }
}

fn push_items(out: &mut String, items: &[String]) {
    for item in items {
        out.push_str("\n  - ");
        out.push_str(item);
    }
}
