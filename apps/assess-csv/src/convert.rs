//! Export pipeline: argument checks, load, validate, filter, write.
//!
//! Every check that can fail before writing runs first, so argument, lookup,
//! parse, and target errors never create or truncate the output file.

use crate::config::Effective;
use crate::error::ExportError;
use crate::export::{open_sink, write_csv};
use crate::models::rules::RuleIndex;
use crate::models::ExportSummary;
use crate::project::project_rows;
use crate::report::{ensure_target, load_report_file, valid_targets};

#[derive(Debug, PartialEq, Eq)]
/// What a successful run produced.
pub enum Outcome {
    /// `--list-targets`: the report's target ids in source order.
    Targets(Vec<String>),
    /// A CSV export.
    Exported(ExportSummary),
}

/// Run one export (or target listing) as described by `eff`.
pub fn run_export(eff: &Effective) -> Result<Outcome, ExportError> {
    let input = eff.input.as_deref().ok_or(ExportError::MissingInput)?;
    let target = if eff.list_targets {
        None
    } else {
        match eff.target.as_deref() {
            None => return Err(ExportError::MissingTarget),
            Some(t) if t.trim().is_empty() => return Err(ExportError::EmptyTarget),
            Some(t) => Some(t),
        }
    };
    if !input.is_file() {
        return Err(ExportError::InputNotFound(input.to_path_buf()));
    }

    let mut report = load_report_file(input)?;
    let target = match target {
        None => return Ok(Outcome::Targets(valid_targets(&report).to_vec())),
        Some(t) => t,
    };
    ensure_target(&report, target)?;

    let rules = RuleIndex::build(std::mem::take(&mut report.rules));
    let rows = project_rows(&report, &rules, target);
    let sink = open_sink(eff.output.as_deref())?;
    let count = write_csv(sink, rows, eff.excel)?;
    tracing::info!(target_id = target, rows = count, "export complete");

    Ok(Outcome::Exported(ExportSummary {
        target: target.to_string(),
        output: eff.output.clone(),
        rows: count,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{codes, exit_code};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    const DOC: &str = r#"{
      "metadata": {"targetIds": ["T1", "T2"]},
      "projects": [{"path": "P", "incidents": [
        {"ruleId": "R1", "incidentId": "A", "targets": {"T1": {"severity": "mandatory", "effort": 1}}},
        {"ruleId": "R2", "incidentId": "B", "targets": {"T2": {"severity": "optional", "effort": 2}}}
      ]}],
      "rules": {"R1": {"title": "One", "severity": "optional", "description": "", "effort": 9}}
    }"#;

    fn eff(input: Option<PathBuf>, target: Option<&str>, output: Option<PathBuf>) -> Effective {
        Effective {
            input,
            target: target.map(str::to_string),
            output,
            excel: false,
            list_targets: false,
        }
    }

    fn code(e: &Effective) -> i32 {
        exit_code(&run_export(e).unwrap_err())
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(code(&eff(None, Some("T1"), None)), codes::INVALID_ARGS);
        let dir = tempdir().unwrap();
        let input = dir.path().join("r.json");
        fs::write(&input, DOC).unwrap();
        assert_eq!(code(&eff(Some(input.clone()), None, None)), codes::INVALID_ARGS);
        assert_eq!(code(&eff(Some(input), Some(""), None)), codes::INVALID_ARGS);
    }

    #[test]
    fn test_argument_errors_precede_lookup() {
        // A missing target is reported even when the input does not exist.
        let e = eff(Some(PathBuf::from("/definitely/not/here.json")), None, None);
        assert_eq!(code(&e), codes::INVALID_ARGS);
        let e = eff(Some(PathBuf::from("/definitely/not/here.json")), Some("T1"), None);
        assert_eq!(code(&e), codes::INPUT_NOT_FOUND);
    }

    #[test]
    fn test_list_targets_ignores_target() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("r.json");
        fs::write(&input, DOC).unwrap();
        let mut e = eff(Some(input), None, None);
        e.list_targets = true;
        assert_eq!(
            run_export(&e).unwrap(),
            Outcome::Targets(vec!["T1".into(), "T2".into()])
        );
    }

    #[test]
    fn test_invalid_target_does_not_touch_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("r.json");
        fs::write(&input, DOC).unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "keep me").unwrap();
        let e = eff(Some(input), Some("T9"), Some(out.clone()));
        assert_eq!(code(&e), codes::INVALID_TARGET);
        assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("r.json");
        fs::write(&input, DOC).unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "stale contents that must be truncated\n".repeat(10)).unwrap();
        let e = eff(Some(input), Some("T1"), Some(out.clone()));
        match run_export(&e).unwrap() {
            Outcome::Exported(s) => {
                assert_eq!(s.rows, 1);
                assert_eq!(s.target, "T1");
                assert_eq!(s.output, Some(out.clone()));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        let text = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "P,R1,One,A,,,,,,mandatory,1,");
    }

    #[test]
    fn test_unwritable_output_is_io_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("r.json");
        fs::write(&input, DOC).unwrap();
        let out = dir.path().join("missing-dir/out.csv");
        assert_eq!(code(&eff(Some(input), Some("T1"), Some(out))), codes::IO_ERROR);
    }
}
