use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "mcpguard.config.v1";

/// `mcpguard.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and falls back to the profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct McpguardConfigV1 {
    /// Optional schema string for tooling (`mcpguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `strict` (default), `warn` or `remediate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Explicit policy: `warning`, `blocking` or `auto-injection`. Wins over the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<String>,

    /// File-name glob selecting agent definitions in the agents directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_glob: Option<String>,

    /// File names that are never audited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<Vec<String>>,

    /// Literal phrases that declare an enforcement section in an agent definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enforcement_phrases: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<FooterConfig>,

    /// Replaces the preset marker groups when non-empty.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FooterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GroupConfig {
    pub name: String,

    /// Display name; defaults to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Case-insensitive regular expressions.
    pub patterns: Vec<String>,

    /// Invocation text injected when the group is missing.
    pub remediation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_matches: Option<usize>,
}
