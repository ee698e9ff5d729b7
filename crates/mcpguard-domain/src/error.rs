use thiserror::Error;

/// Reasons a rule set cannot be constructed.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule set declares no marker groups")]
    NoGroups,

    #[error("marker group '{0}' is declared more than once")]
    DuplicateGroup(String),

    #[error("marker group '{0}' has no patterns")]
    EmptyGroup(String),

    #[error("invalid pattern for marker group '{group}': {pattern}")]
    InvalidPattern {
        group: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid footer pattern: {pattern}")]
    InvalidFooterPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("injected remediation for marker group '{0}' does not satisfy its patterns")]
    RemediationUnsatisfied(String),

    #[error("appended footer template does not satisfy the footer pattern '{0}'")]
    FooterTemplateUnsatisfied(String),
}
