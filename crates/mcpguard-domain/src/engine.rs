use crate::model::RuleSet;
use mcpguard_types::{GroupPresence, SubjectKind, Verdict};
use regex::Regex;
use std::sync::LazyLock;

static TOOLS_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*tools[ \t]*:[ \t]*([^\r\n]*)").expect("tools field regex is valid")
});

/// Pattern-based check of free text (agent responses).
pub fn check_text(rules: &RuleSet, subject: &str, text: &str) -> Verdict {
    let mut group_presence = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for matcher in rules.matchers() {
        let group = &matcher.group;
        let matched = matcher.distinct_matches(text);
        let present = matched > 0;

        if !present {
            errors.push(format!(
                "Agent {subject} did not use {} (`{}`), which is required",
                group.label, group.name
            ));
        } else if matched < group.recommended_matches {
            warnings.push(format!(
                "Agent {subject} made partial use of {}: {matched} of {} recommended invocations",
                group.label, group.recommended_matches
            ));
        }

        group_presence.push(GroupPresence {
            group: group.name.clone(),
            label: group.label.clone(),
            present,
        });
    }

    let footer_present = rules.footer_present(text);
    if !footer_present {
        errors.push(format!(
            "Agent {subject} did not include '{}', which is required",
            rules.footer().pattern
        ));
    }

    finish(Verdict {
        subject: subject.to_string(),
        kind: SubjectKind::Response,
        group_presence,
        footer_present: Some(footer_present),
        enforcement_declared: None,
        passed: false,
        errors,
        warnings,
    })
}

/// Name-based check of an agent definition: every group name must appear in the `tools:` field.
pub fn check_config_document(rules: &RuleSet, subject: &str, text: &str) -> Verdict {
    let tools = tools_field(text).unwrap_or("");
    let mut group_presence = Vec::new();
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for group in rules.groups() {
        let present = tools.contains(group.name.as_str());
        if !present {
            errors.push(format!(
                "Agent {subject} does not declare {} tools (`{}`) in its tools field",
                group.label, group.name
            ));
        }
        group_presence.push(GroupPresence {
            group: group.name.clone(),
            label: group.label.clone(),
            present,
        });
    }

    let phrases = rules.enforcement_phrases();
    let enforcement_declared = phrases.iter().any(|p| text.contains(p.as_str()));
    if !enforcement_declared {
        warnings.push(format!(
            "Agent {subject} has no explicit enforcement section (expected one of: {})",
            phrases.join(", ")
        ));
    }

    finish(Verdict {
        subject: subject.to_string(),
        kind: SubjectKind::Configuration,
        group_presence,
        footer_present: None,
        enforcement_declared: Some(enforcement_declared),
        passed: false,
        errors,
        warnings,
    })
}

/// Failing verdict for a document that could not be read.
pub fn unreadable_verdict(rules: &RuleSet, subject: &str, reason: &str) -> Verdict {
    let group_presence = rules
        .groups()
        .map(|g| GroupPresence {
            group: g.name.clone(),
            label: g.label.clone(),
            present: false,
        })
        .collect();

    finish(Verdict {
        subject: subject.to_string(),
        kind: SubjectKind::Unreadable,
        group_presence,
        footer_present: None,
        enforcement_declared: None,
        passed: false,
        errors: vec![format!("Agent file not readable: {reason}")],
        warnings: Vec::new(),
    })
}

/// Value of the first `tools: <value>` line with a non-empty value, trimmed.
/// Key match is case-insensitive.
pub fn tools_field(text: &str) -> Option<&str> {
    TOOLS_FIELD
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .find(|v| !v.is_empty())
}

fn finish(mut verdict: Verdict) -> Verdict {
    verdict.passed = verdict.recompute_passed();
    verdict
}
