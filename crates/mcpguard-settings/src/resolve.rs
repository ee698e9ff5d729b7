use crate::model::{GroupConfig, McpguardConfigV1, SCHEMA_CONFIG_V1};
use crate::presets::{self, DEFAULT_DOCUMENT_GLOB, DEFAULT_RESERVED};
use anyhow::Context;
use globset::Glob;
use mcpguard_domain::{EnforcementPolicy, FooterRule, MarkerGroup, RuleSet};

const DEFAULT_RECOMMENDED_MATCHES: usize = 2;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub enforcement: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub profile: String,
    pub enforcement: EnforcementPolicy,
    pub rules: RuleSet,
    pub document_glob: String,
    pub reserved: Vec<String>,
}

pub fn resolve_config(
    cfg: McpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let Some(mut enforcement) = presets::preset(&profile) else {
        anyhow::bail!("unknown profile: {profile} (expected strict|warn|remediate)");
    };

    // CLI override wins over the config file, which wins over the profile.
    if let Some(policy) = overrides.enforcement.as_deref().or(cfg.enforcement.as_deref()) {
        enforcement = parse_policy(policy)?;
    }

    let document_glob = cfg
        .document_glob
        .clone()
        .unwrap_or_else(|| DEFAULT_DOCUMENT_GLOB.to_string());
    Glob::new(&document_glob)
        .with_context(|| format!("invalid document_glob: {document_glob}"))?;

    let reserved = cfg
        .reserved
        .clone()
        .unwrap_or_else(|| DEFAULT_RESERVED.iter().map(|s| s.to_string()).collect());

    let groups = if cfg.groups.is_empty() {
        presets::mcp_groups()
    } else {
        cfg.groups.iter().map(group_from_config).collect()
    };

    let default_footer = presets::mcp_footer();
    let footer_cfg = cfg.footer.clone().unwrap_or_default();
    let footer = FooterRule {
        pattern: footer_cfg.pattern.unwrap_or(default_footer.pattern),
        template: footer_cfg.template.unwrap_or(default_footer.template),
    };

    let phrases = cfg
        .enforcement_phrases
        .clone()
        .unwrap_or_else(presets::mcp_enforcement_phrases);

    let rules = RuleSet::new(groups, footer, phrases).context("invalid marker rules")?;

    Ok(ResolvedConfig {
        profile,
        enforcement,
        rules,
        document_glob,
        reserved,
    })
}

fn group_from_config(g: &GroupConfig) -> MarkerGroup {
    MarkerGroup {
        name: g.name.clone(),
        label: g.label.clone().unwrap_or_else(|| g.name.clone()),
        patterns: g.patterns.clone(),
        remediation: g.remediation.clone(),
        recommended_matches: g.recommended_matches.unwrap_or(DEFAULT_RECOMMENDED_MATCHES),
    }
}

/// Parse an enforcement policy in its CLI/config spelling.
pub fn parse_policy(v: &str) -> anyhow::Result<EnforcementPolicy> {
    match v {
        "warning" => Ok(EnforcementPolicy::Warn),
        "blocking" => Ok(EnforcementPolicy::Block),
        "auto-injection" => Ok(EnforcementPolicy::AutoRemediate),
        other => anyhow::bail!(
            "unknown enforcement: {other} (expected warning|blocking|auto-injection)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_uses_strict_mcp_defaults() {
        let resolved =
            resolve_config(McpguardConfigV1::default(), Overrides::default()).expect("resolve");
        assert_eq!(resolved.profile, "strict");
        assert_eq!(resolved.enforcement, EnforcementPolicy::Block);
        assert_eq!(resolved.document_glob, "*.md");
        assert_eq!(resolved.reserved, vec!["README.md".to_string()]);
        assert_eq!(resolved.rules.groups().count(), 2);
        assert_eq!(resolved.rules.enforcement_phrases().len(), 2);
    }

    #[test]
    fn precedence_is_cli_then_config_then_profile() {
        let cfg = parse_config_toml("profile = \"warn\"\nenforcement = \"auto-injection\"\n")
            .expect("parse");

        let from_config = resolve_config(cfg.clone(), Overrides::default()).expect("resolve");
        assert_eq!(from_config.profile, "warn");
        assert_eq!(from_config.enforcement, EnforcementPolicy::AutoRemediate);

        let overridden = resolve_config(
            cfg,
            Overrides {
                profile: None,
                enforcement: Some("blocking".to_string()),
            },
        )
        .expect("resolve");
        assert_eq!(overridden.enforcement, EnforcementPolicy::Block);
    }

    #[test]
    fn profile_alone_selects_policy() {
        let resolved = resolve_config(
            McpguardConfigV1::default(),
            Overrides {
                profile: Some("remediate".to_string()),
                enforcement: None,
            },
        )
        .expect("resolve");
        assert_eq!(resolved.enforcement, EnforcementPolicy::AutoRemediate);
    }

    #[test]
    fn custom_groups_replace_presets() {
        let cfg = parse_config_toml(
            r#"
reserved = ["README.md", "TEMPLATE.md"]
enforcement_phrases = ["DOCS REQUIRED"]

[footer]
pattern = "Sources:"
template = "Sources: (auto-injected)\n"

[[groups]]
name = "docs__search"
label = "Docs"
patterns = ["docs__search__query"]
remediation = "docs__search__query --q \"topic\""
recommended_matches = 1
"#,
        )
        .expect("parse");

        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let groups: Vec<_> = resolved.rules.groups().collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "docs__search");
        assert_eq!(groups[0].label, "Docs");
        assert_eq!(groups[0].recommended_matches, 1);
        assert_eq!(resolved.rules.footer().pattern, "Sources:");
        assert_eq!(resolved.reserved.len(), 2);
    }

    #[test]
    fn group_label_defaults_to_name() {
        let cfg = parse_config_toml(
            r#"
[[groups]]
name = "x__tool"
patterns = ["x__tool__run"]
remediation = "x__tool__run"
"#,
        )
        .expect("parse");
        let resolved = resolve_config(cfg, Overrides::default()).expect("resolve");
        let group = resolved.rules.group("x__tool").expect("group");
        assert_eq!(group.label, "x__tool");
        assert_eq!(group.recommended_matches, 2);
    }

    #[test]
    fn unknown_values_are_rejected() {
        let err = resolve_config(
            McpguardConfigV1::default(),
            Overrides {
                profile: Some("lenient".to_string()),
                enforcement: None,
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown profile"));

        let err = parse_policy("silent").unwrap_err();
        assert!(err.to_string().contains("warning|blocking|auto-injection"));
    }

    #[test]
    fn only_canonical_policy_spellings_are_accepted() {
        assert_eq!(parse_policy("warning").expect("warning"), EnforcementPolicy::Warn);
        assert_eq!(parse_policy("blocking").expect("blocking"), EnforcementPolicy::Block);
        assert_eq!(
            parse_policy("auto-injection").expect("auto-injection"),
            EnforcementPolicy::AutoRemediate
        );
        for alias in ["warn", "block", "auto-remediate"] {
            assert!(parse_policy(alias).is_err(), "alias accepted: {alias}");
        }
    }

    #[test]
    fn config_schema_is_checked_when_present() {
        let cfg = parse_config_toml("schema = \"mcpguard.config.v1\"\n").expect("parse");
        resolve_config(cfg, Overrides::default()).expect("v1 schema resolves");

        let cfg = parse_config_toml("schema = \"mcpguard.config.v2\"\n").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("unsupported config schema"));
    }

    #[test]
    fn footer_anchored_to_start_of_text_is_rejected() {
        let cfg = parse_config_toml(
            r#"
[footer]
pattern = "^Sources:"
template = "Sources: (auto)\n"
"#,
        )
        .expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("invalid marker rules"));
        assert!(msg.contains("^Sources:"));
    }

    #[test]
    fn invalid_rules_surface_with_context() {
        let cfg = parse_config_toml(
            r#"
[[groups]]
name = "broken"
patterns = ["broken__("]
remediation = "broken__("
"#,
        )
        .expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("invalid marker rules"));
    }

    #[test]
    fn invalid_document_glob_is_rejected() {
        let cfg = parse_config_toml("document_glob = \"[md\"\n").expect("parse");
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("document_glob"));
    }
}
