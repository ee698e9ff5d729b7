//! Use case orchestration for mcpguard.
//!
//! This crate provides the application layer: the [`ComplianceEngine`] facade and the use cases
//! that coordinate the settings, repo, domain and render layers. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod engine;
mod report;
mod respond;

pub use audit::{AuditInput, AuditOutput, run_audit};
pub use engine::ComplianceEngine;
pub use mcpguard_domain::{Decision, EnforcementPolicy};
pub use report::{build_report, serialize_report};
pub use respond::{ResponseInput, ResponseOutput, run_response_check};

/// Load config text (empty means defaults) and build an engine from it.
pub fn load_engine(
    config_text: &str,
    overrides: mcpguard_settings::Overrides,
) -> anyhow::Result<ComplianceEngine> {
    use anyhow::Context;

    let cfg = if config_text.trim().is_empty() {
        mcpguard_settings::McpguardConfigV1::default()
    } else {
        mcpguard_settings::parse_config_toml(config_text).context("parse config")?
    };
    let resolved = mcpguard_settings::resolve_config(cfg, overrides).context("resolve config")?;
    ComplianceEngine::from_resolved(resolved)
}
