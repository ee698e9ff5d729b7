use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// What kind of document a verdict was produced for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// Free text produced by an agent (pattern-based check, footer required).
    Response,
    /// Agent definition file (name-based check on the `tools:` field).
    Configuration,
    /// The document could not be read; every group is reported absent.
    Unreadable,
}

/// Presence of one marker group, kept in group declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupPresence {
    pub group: String,
    pub label: String,
    pub present: bool,
}

/// Result of one compliance check.
///
/// `passed` is derived from `group_presence` and `footer_present` only; use
/// [`Verdict::recompute_passed`] to re-derive it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Verdict {
    pub subject: String,
    pub kind: SubjectKind,
    pub group_presence: Vec<GroupPresence>,

    /// `None` when the check does not require a footer (configuration documents).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_present: Option<bool>,

    /// Whether an enforcement-declaration phrase was found (configuration documents only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement_declared: Option<bool>,

    pub passed: bool,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Verdict {
    pub fn recompute_passed(&self) -> bool {
        self.group_presence.iter().all(|g| g.present) && self.footer_present != Some(false)
    }

    pub fn is_present(&self, group: &str) -> bool {
        self.group_presence
            .iter()
            .any(|g| g.group == group && g.present)
    }

    pub fn missing_groups(&self) -> impl Iterator<Item = &GroupPresence> {
        self.group_presence.iter().filter(|g| !g.present)
    }
}
