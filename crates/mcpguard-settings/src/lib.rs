//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{FooterConfig, GroupConfig, McpguardConfigV1, SCHEMA_CONFIG_V1};
pub use presets::{DEFAULT_DOCUMENT_GLOB, DEFAULT_RESERVED, mcp_rule_set};
pub use resolve::{Overrides, ResolvedConfig, parse_policy};

/// Parse `mcpguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<McpguardConfigV1> {
    let cfg: McpguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective configuration (profile + config file + CLI overrides).
pub fn resolve_config(
    cfg: McpguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
