//! Rendering utilities for terminal surfaces (ledger summary, audit listing).

#![forbid(unsafe_code)]

mod audit;
mod summary;

pub use audit::render_audit;
pub use summary::{NO_VALIDATIONS, render_summary};

fn mark(present: bool) -> &'static str {
    if present { "yes" } else { "no" }
}

fn status(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}
