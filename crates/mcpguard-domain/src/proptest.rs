//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - verdicts being recomputable from their own fields
//! - policy outcomes for every enforcement mode
//! - remediation always producing passing, stable text

use crate::ledger::ComplianceLedger;
use crate::policy::{EnforcementPolicy, decide};
use crate::test_support::{FOOTER, rules};
use crate::{check_config_document, check_text, remediate};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Fragments that may or may not satisfy a rule, mixed with filler.
fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("tool__alpha__lookup".to_string()),
        Just("tool__alpha__fetch".to_string()),
        Just("tool__beta__overview".to_string()),
        Just("TOOL__BETA__SEARCH".to_string()),
        Just("tool__beta__list_dir".to_string()),
        Just(FOOTER.to_string()),
        Just("tools: tool__alpha".to_string()),
        Just("TOOL ENFORCEMENT".to_string()),
        "[a-zA-Z0-9 _:.\\-]{0,24}",
        "\\PC{0,16}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..8).prop_map(|parts| parts.join("\n"))
}

fn arb_policy() -> impl Strategy<Value = EnforcementPolicy> {
    prop::sample::select(EnforcementPolicy::ALL.to_vec())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn verdict_passed_is_recomputable(text in arb_text()) {
        let rules = rules();
        let response = check_text(&rules, "p", &text);
        prop_assert_eq!(response.passed, response.recompute_passed());
        let config = check_config_document(&rules, "p", &text);
        prop_assert_eq!(config.passed, config.recompute_passed());
    }

    #[test]
    fn passed_iff_no_errors(text in arb_text()) {
        let v = check_text(&rules(), "p", &text);
        prop_assert_eq!(v.passed, v.errors.is_empty());
        let missing = v.group_presence.iter().filter(|g| !g.present).count()
            + usize::from(v.footer_present == Some(false));
        prop_assert_eq!(v.errors.len(), missing);
    }

    #[test]
    fn policy_outcomes(text in arb_text(), policy in arb_policy()) {
        let rules = rules();
        let mut ledger = ComplianceLedger::new();
        let d = decide(&rules, &mut ledger, "p", &text, policy);
        prop_assert_eq!(ledger.len(), 1);
        match policy {
            EnforcementPolicy::Warn => prop_assert!(d.allowed),
            EnforcementPolicy::Block => prop_assert_eq!(d.allowed, d.verdict.passed),
            EnforcementPolicy::AutoRemediate => {
                prop_assert!(d.allowed);
                prop_assert!(check_text(&rules, "p", &d.message).passed);
            }
        }
    }

    #[test]
    fn remediation_passes_and_is_stable(text in arb_text()) {
        let rules = rules();
        let once = remediate(&rules, &text);
        prop_assert!(check_text(&rules, "p", &once).passed);
        prop_assert_eq!(remediate(&rules, &once), once.clone());
        prop_assert!(once.contains(text.as_str()));
    }
}
