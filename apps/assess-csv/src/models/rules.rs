//! Rule index: point lookups of rule records by identifier.

use super::report::Rule;
use std::collections::HashMap;

#[derive(Debug, Default)]
/// Mapping from rule id to its definition.
pub struct RuleIndex {
    rules: HashMap<String, Rule>,
}

impl RuleIndex {
    /// Build the index from the report's `rules` object in a single pass.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Rule)>,
    {
        let rules: HashMap<String, Rule> = entries.into_iter().collect();
        tracing::debug!(rules = rules.len(), "built rule index");
        Self { rules }
    }

    /// Rule record for `rule_id`, if the report defines it.
    pub fn get(&self, rule_id: &str) -> Option<&Rule> {
        self.rules.get(rule_id)
    }

    /// Display title for `rule_id`; empty when the rule is unknown.
    pub fn title(&self, rule_id: &str) -> &str {
        self.get(rule_id).map(|r| r.title.as_str()).unwrap_or("")
    }
}
