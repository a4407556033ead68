//! Target filtering and row projection.
//!
//! Walks `projects[*].incidents[*]` in input order and yields one `CsvRow`
//! per incident that declares the requested target. Severity and effort come
//! from the target override only; the rule contributes its title.

use crate::models::report::{Incident, Report};
use crate::models::rules::RuleIndex;
use crate::models::CsvRow;

/// Lazily project all rows for `target`.
pub fn project_rows<'a>(
    report: &'a Report,
    rules: &'a RuleIndex,
    target: &'a str,
) -> impl Iterator<Item = CsvRow> + 'a {
    report.projects.iter().flat_map(move |project| {
        let path = project.path.as_deref().unwrap_or("");
        project
            .incidents
            .iter()
            .flatten()
            .filter(move |inc| inc.applies_to(target))
            .map(move |inc| project_incident(path, inc, rules, target))
    })
}

/// Build the row for one incident. The incident is assumed to apply to
/// `target`.
pub fn project_incident(
    project: &str,
    inc: &Incident,
    rules: &RuleIndex,
    target: &str,
) -> CsvRow {
    let rule_id = inc.rule_id.clone().unwrap_or_default();
    let ov = inc.target_override(target);
    CsvRow {
        project: project.to_string(),
        rule_title: rules.title(&rule_id).to_string(),
        rule_id,
        incident_id: inc.incident_id.clone().unwrap_or_default(),
        location: inc.location.clone().unwrap_or_default(),
        location_kind: inc.location_kind.clone().unwrap_or_default(),
        line: render_int(inc.line),
        column: render_int(inc.column),
        snippet: inc.snippet.clone().unwrap_or_default(),
        severity: ov.and_then(|o| o.severity.clone()).unwrap_or_default(),
        effort: render_int(ov.and_then(|o| o.effort)),
        labels: inc.labels.as_deref().map(|l| l.join(";")).unwrap_or_default(),
    }
}

fn render_int(v: Option<i64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}
