use crate::model::{FooterRule, MarkerGroup, RuleSet};

pub const FOOTER: &str = "Usage Report:";

pub fn alpha_group() -> MarkerGroup {
    MarkerGroup {
        name: "tool__alpha".to_string(),
        label: "Alpha".to_string(),
        patterns: vec![
            r"tool__alpha__lookup".to_string(),
            r"tool__alpha__fetch".to_string(),
        ],
        remediation: "tool__alpha__lookup --name \"project\"\ntool__alpha__fetch --id \"[id]\""
            .to_string(),
        recommended_matches: 2,
    }
}

pub fn beta_group() -> MarkerGroup {
    MarkerGroup {
        name: "tool__beta".to_string(),
        label: "Beta".to_string(),
        patterns: vec![
            r"tool__beta__overview".to_string(),
            r"tool__beta__search".to_string(),
            r"tool__beta__list_dir".to_string(),
        ],
        remediation: "tool__beta__overview --path \".\"".to_string(),
        recommended_matches: 2,
    }
}

pub fn footer() -> FooterRule {
    FooterRule {
        pattern: FOOTER.to_string(),
        template: "## Usage Report: (auto-injected)\n```yaml\nalpha_calls: \"auto\"\n```\n"
            .to_string(),
    }
}

pub fn rules() -> RuleSet {
    RuleSet::new(
        vec![alpha_group(), beta_group()],
        footer(),
        vec!["TOOL ENFORCEMENT".to_string()],
    )
    .expect("test rule set is valid")
}

/// Text that satisfies every group (fully) and carries the footer.
pub fn compliant_text() -> String {
    "Plan\n\
     tool__alpha__lookup --name serde\n\
     tool__alpha__fetch --id /serde\n\
     tool__beta__overview --path src\n\
     tool__beta__search --pattern Verdict\n\
     \n\
     Usage Report: alpha=2 beta=2\n"
        .to_string()
}
