//! Shared data models: the ingested report schema, the rule index, and the
//! flattened CSV row.

pub mod report;
pub mod rules;

use std::path::PathBuf;

/// Fixed CSV column order.
pub const HEADERS: [&str; 12] = [
    "Project",
    "RuleId",
    "RuleTitle",
    "IncidentId",
    "Location",
    "LocationKind",
    "Line",
    "Column",
    "Snippet",
    "Severity",
    "Effort",
    "Labels",
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// One projected (project, incident) pair, already rendered to text.
pub struct CsvRow {
    pub project: String,
    pub rule_id: String,
    pub rule_title: String,
    pub incident_id: String,
    pub location: String,
    pub location_kind: String,
    pub line: String,
    pub column: String,
    pub snippet: String,
    pub severity: String,
    pub effort: String,
    pub labels: String,
}

impl CsvRow {
    /// Fields in `HEADERS` order.
    pub fn fields(&self) -> [&str; 12] {
        [
            &self.project,
            &self.rule_id,
            &self.rule_title,
            &self.incident_id,
            &self.location,
            &self.location_kind,
            &self.line,
            &self.column,
            &self.snippet,
            &self.severity,
            &self.effort,
            &self.labels,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of a completed export, used by the console printers.
pub struct ExportSummary {
    pub target: String,
    /// `None` when the CSV went to standard output.
    pub output: Option<PathBuf>,
    pub rows: usize,
}
