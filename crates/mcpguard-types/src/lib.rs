//! Stable DTOs shared across the mcpguard workspace.
//!
//! This crate is intentionally boring:
//! - the verdict produced by every compliance check
//! - the JSON report envelope written by `--report-out`

#![forbid(unsafe_code)]

pub mod receipt;
pub mod verdict;

pub use receipt::{AuditReport, AuditSummary, ToolMeta, SCHEMA_REPORT_V1};
pub use verdict::{GroupPresence, SubjectKind, Verdict};
