use crate::engine::check_text;
use crate::model::{MarkerGroup, RuleSet};

/// Inject the markers `text` is missing.
///
/// Absent groups get a headed block prepended, in declaration order. A missing
/// footer is appended last. Text that already passes comes back unchanged, so
/// applying this twice gives the same result as applying it once.
pub fn remediate(rules: &RuleSet, text: &str) -> String {
    let verdict = check_text(rules, "", text);
    if verdict.passed {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 512);
    for group in rules.groups() {
        if verdict.is_present(&group.name) {
            continue;
        }
        out.push_str(&render_group_block(group));
        out.push('\n');
    }

    out.push_str(text);

    if verdict.footer_present == Some(false) {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&rules.footer().template);
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    out
}

pub(crate) fn render_group_block(group: &MarkerGroup) -> String {
    format!(
        "## Auto-Injected {} Invocation\n\n```bash\n{}\n```\n",
        group.label,
        group.remediation.trim_end()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FOOTER, compliant_text, rules};

    #[test]
    fn injects_groups_in_declaration_order_and_footer_last() {
        let rules = rules();
        let out = remediate(&rules, "The answer is 42.");

        let alpha = out.find("## Auto-Injected Alpha Invocation").expect("alpha block");
        let beta = out.find("## Auto-Injected Beta Invocation").expect("beta block");
        let body = out.find("The answer is 42.").expect("original text");
        let footer = out.find(FOOTER).expect("footer block");
        assert!(alpha < beta);
        assert!(beta < body);
        assert!(body < footer);
        assert!(out.ends_with('\n'));

        assert!(check_text(&rules, "a", &out).passed);
    }

    #[test]
    fn only_missing_pieces_are_injected() {
        let rules = rules();
        let text = "tool__beta__search x\ntool__beta__overview y\nUsage Report: done\n";
        let out = remediate(&rules, text);
        assert!(out.contains("Auto-Injected Alpha"));
        assert!(!out.contains("Auto-Injected Beta"));
        assert!(out.ends_with(text));
        assert_eq!(out.matches(FOOTER).count(), 1);
    }

    #[test]
    fn passing_text_is_returned_byte_for_byte() {
        let text = compliant_text();
        assert_eq!(remediate(&rules(), &text), text);
    }

    #[test]
    fn remediation_is_idempotent() {
        let rules = rules();
        for input in ["", "plain", "tool__alpha__fetch only", "Usage Report: x"] {
            let once = remediate(&rules, input);
            let twice = remediate(&rules, &once);
            assert_eq!(once, twice, "input: {input:?}");
        }
    }

    #[test]
    fn empty_text_gets_every_block() {
        let rules = rules();
        let out = remediate(&rules, "");
        assert!(out.starts_with("## Auto-Injected Alpha Invocation"));
        assert!(check_text(&rules, "a", &out).passed);
    }
}
