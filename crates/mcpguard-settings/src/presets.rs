use mcpguard_domain::{EnforcementPolicy, FooterRule, MarkerGroup, RuleError, RuleSet};

pub const DEFAULT_DOCUMENT_GLOB: &str = "*.md";
pub const DEFAULT_RESERVED: &[&str] = &["README.md"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EnforcementPolicy> {
    match profile {
        "strict" => Some(EnforcementPolicy::Block),
        "warn" => Some(EnforcementPolicy::Warn),
        "remediate" => Some(EnforcementPolicy::AutoRemediate),
        _ => None,
    }
}

pub fn mcp_groups() -> Vec<MarkerGroup> {
    vec![
        MarkerGroup {
            name: "mcp__context7".to_string(),
            label: "Context7".to_string(),
            patterns: vec![
                r"mcp__context7__resolve-library-id".to_string(),
                r"mcp__context7__get-library-docs".to_string(),
            ],
            remediation: "\
mcp__context7__resolve-library-id --libraryName \"project-frameworks\"
mcp__context7__get-library-docs --context7CompatibleLibraryID \"[resolved-id]\" --topic \"patterns\""
                .to_string(),
            recommended_matches: 2,
        },
        MarkerGroup {
            name: "mcp__serena".to_string(),
            label: "Serena".to_string(),
            patterns: vec![
                r"mcp__serena__get_symbols_overview".to_string(),
                r"mcp__serena__search_for_pattern".to_string(),
                r"mcp__serena__find_symbol".to_string(),
                r"mcp__serena__list_dir".to_string(),
                r"mcp__serena__get_current_config".to_string(),
            ],
            remediation: "\
mcp__serena__get_symbols_overview --relative_path \".\"
mcp__serena__search_for_pattern --substring_pattern \"relevant-pattern\""
                .to_string(),
            recommended_matches: 2,
        },
    ]
}

pub fn mcp_footer() -> FooterRule {
    FooterRule {
        pattern: "MCP Usage Report:".to_string(),
        template: "\
## MCP Usage Report: (auto-injected)
```yaml
context7_calls: \"Auto-injected for compliance\"
serena_calls: \"Auto-injected for compliance\"
integration_quality: \"Automatic MCP integration applied\"
```
"
        .to_string(),
    }
}

pub fn mcp_enforcement_phrases() -> Vec<String> {
    vec!["MCP ENFORCEMENT".to_string(), "MCP USAGE OBLIGATOIRE".to_string()]
}

/// The built-in rule set: Context7 and Serena usage plus the `MCP Usage Report:` footer.
pub fn mcp_rule_set() -> Result<RuleSet, RuleError> {
    RuleSet::new(mcp_groups(), mcp_footer(), mcp_enforcement_phrases())
}
