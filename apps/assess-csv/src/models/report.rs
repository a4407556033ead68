//! Assessment report schema.
//!
//! Only the parts of the analyzer output consumed by the CSV export are
//! modeled; every other key is ignored. Optional fields are explicit
//! `Option`s so absence is preserved all the way to rendering (an absent
//! `line` renders empty, not `0`).

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
/// Top-level assessment report.
pub struct Report {
    pub metadata: Metadata,
    pub projects: Vec<Project>,
    pub rules: HashMap<String, Rule>,
}

#[derive(Debug, Deserialize)]
/// Report metadata; `targetIds` defines the valid filter values.
pub struct Metadata {
    #[serde(rename = "targetIds")]
    pub target_ids: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
/// One analyzed project.
pub struct Project {
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub incidents: Option<Vec<Incident>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A single reported issue instance.
pub struct Incident {
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub incident_id: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_kind: Option<String>,
    #[serde(default)]
    pub line: Option<i64>,
    #[serde(default)]
    pub column: Option<i64>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Target name -> override. Key presence alone decides membership, so a
    /// `null` value still counts. A `null` map is treated as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: HashMap<String, Option<TargetOverride>>,
}

#[derive(Debug, Default, Deserialize)]
/// Per-target severity/effort; wins over the rule's own values.
pub struct TargetOverride {
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub effort: Option<i64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
/// Rule definition. Missing or null leaves default to empty/zero.
pub struct Rule {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub severity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effort: i64,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

impl Incident {
    /// True when this incident declares `target` in its `targets` map.
    pub fn applies_to(&self, target: &str) -> bool {
        self.targets.contains_key(target)
    }

    /// Override for `target`, if declared with a non-null value.
    pub fn target_override(&self, target: &str) -> Option<&TargetOverride> {
        self.targets.get(target).and_then(Option::as_ref)
    }
}
