use crate::engine::check_text;
use crate::error::RuleError;
use crate::remediate::remediate;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;

/// Texts that remediation must turn into passing text for a rule set to be accepted.
const REMEDIATION_SAMPLES: [&str; 3] = ["", "x", "first line\nsecond line"];

/// Named set of alternative markers. The group is present when any pattern matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerGroup {
    /// Identifier; also the literal looked up in a configuration document's `tools:` field.
    pub name: String,
    /// Human-readable name used in messages and reports.
    pub label: String,
    pub patterns: Vec<String>,
    /// Illustrative invocation injected by remediation when the group is absent.
    pub remediation: String,
    /// Distinct patterns a response should match before usage counts as complete.
    pub recommended_matches: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FooterRule {
    pub pattern: String,
    /// Block appended by remediation when the footer is absent.
    pub template: String,
}

#[derive(Clone, Debug)]
pub(crate) struct GroupMatcher {
    pub(crate) group: MarkerGroup,
    regexes: Vec<Regex>,
}

impl GroupMatcher {
    /// Number of distinct patterns of this group that match `text`.
    pub(crate) fn distinct_matches(&self, text: &str) -> usize {
        self.regexes.iter().filter(|re| re.is_match(text)).count()
    }
}

/// Validated, compiled rule set. Groups keep their declaration order.
#[derive(Clone, Debug)]
pub struct RuleSet {
    groups: Vec<GroupMatcher>,
    footer: FooterRule,
    footer_regex: Regex,
    enforcement_phrases: Vec<String>,
}

impl RuleSet {
    pub fn new(
        groups: Vec<MarkerGroup>,
        footer: FooterRule,
        enforcement_phrases: Vec<String>,
    ) -> Result<Self, RuleError> {
        if groups.is_empty() {
            return Err(RuleError::NoGroups);
        }

        let mut seen = BTreeSet::new();
        let mut matchers = Vec::with_capacity(groups.len());
        for group in groups {
            if !seen.insert(group.name.clone()) {
                return Err(RuleError::DuplicateGroup(group.name));
            }
            if group.patterns.is_empty() {
                return Err(RuleError::EmptyGroup(group.name));
            }
            let regexes = group
                .patterns
                .iter()
                .map(|p| {
                    compile(p).map_err(|source| RuleError::InvalidPattern {
                        group: group.name.clone(),
                        pattern: p.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            matchers.push(GroupMatcher { group, regexes });
        }

        let footer_regex =
            compile(&footer.pattern).map_err(|source| RuleError::InvalidFooterPattern {
                pattern: footer.pattern.clone(),
                source,
            })?;

        let rules = Self {
            groups: matchers,
            footer,
            footer_regex,
            enforcement_phrases,
        };
        rules.check_remediation()?;
        Ok(rules)
    }

    /// Injected blocks and footer must satisfy the rules where `remediate` places them.
    fn check_remediation(&self) -> Result<(), RuleError> {
        for sample in REMEDIATION_SAMPLES {
            let verdict = check_text(self, "", &remediate(self, sample));
            if let Some(missing) = verdict.missing_groups().next() {
                return Err(RuleError::RemediationUnsatisfied(missing.group.clone()));
            }
            if verdict.footer_present == Some(false) {
                return Err(RuleError::FooterTemplateUnsatisfied(
                    self.footer.pattern.clone(),
                ));
            }
        }
        Ok(())
    }

    pub fn groups(&self) -> impl Iterator<Item = &MarkerGroup> {
        self.groups.iter().map(|m| &m.group)
    }

    pub fn group(&self, name: &str) -> Option<&MarkerGroup> {
        self.groups().find(|g| g.name == name)
    }

    pub fn footer(&self) -> &FooterRule {
        &self.footer
    }

    pub fn enforcement_phrases(&self) -> &[String] {
        &self.enforcement_phrases
    }

    pub(crate) fn matchers(&self) -> &[GroupMatcher] {
        &self.groups
    }

    pub(crate) fn footer_present(&self, text: &str) -> bool {
        self.footer_regex.is_match(text)
    }
}

fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}
