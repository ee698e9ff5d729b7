//! Pure compliance evaluation (no IO).
//!
//! Input: document text plus a rule set constructed elsewhere.
//! Output: verdicts, enforcement decisions and remediated text.

#![forbid(unsafe_code)]

pub mod ledger;
pub mod model;
pub mod policy;

mod engine;
mod error;
mod remediate;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::{check_config_document, check_text, tools_field, unreadable_verdict};
pub use error::RuleError;
pub use ledger::ComplianceLedger;
pub use model::{FooterRule, MarkerGroup, RuleSet};
pub use policy::{Decision, EnforcementPolicy, decide};
pub use remediate::remediate;
