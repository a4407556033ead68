//! Report loading, structural validation, and target enumeration.
//!
//! The whole document is read into memory and parsed once. Validation is
//! presence-only and short-circuits on the first missing key, checked in the
//! order `metadata`, `metadata.targetIds`, `projects`, `rules`. Typed
//! deserialization follows, so a wrong-typed value fails there instead.

use crate::error::ExportError;
use crate::models::report::Report;
use serde_json::Value as Json;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read and validate a report from `reader`.
pub fn load_report<R: Read>(mut reader: R) -> Result<Report, ExportError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    tracing::debug!(bytes = buf.len(), "read report input");
    parse_report(&buf)
}

/// Open `path` and load the report. The caller is expected to have checked
/// that the file exists.
pub fn load_report_file(path: &Path) -> Result<Report, ExportError> {
    let file = File::open(path)?;
    load_report(file)
}

/// Parse and validate report bytes. A leading UTF-8 BOM is skipped.
pub fn parse_report(bytes: &[u8]) -> Result<Report, ExportError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let doc: Json = serde_json::from_slice(bytes)?;
    validate_structure(&doc)?;
    let report: Report = serde_json::from_value(doc)?;
    tracing::debug!(
        targets = report.metadata.target_ids.len(),
        projects = report.projects.len(),
        rules = report.rules.len(),
        "parsed report"
    );
    Ok(report)
}

/// Check that the required keys are present, stopping at the first miss.
pub fn validate_structure(doc: &Json) -> Result<(), ExportError> {
    let metadata = doc.get("metadata").ok_or(ExportError::MissingKey("metadata"))?;
    if metadata.get("targetIds").is_none() {
        return Err(ExportError::MissingKey("metadata.targetIds"));
    }
    if doc.get("projects").is_none() {
        return Err(ExportError::MissingKey("projects"));
    }
    if doc.get("rules").is_none() {
        return Err(ExportError::MissingKey("rules"));
    }
    Ok(())
}

/// Valid target names in source order.
pub fn valid_targets(report: &Report) -> &[String] {
    &report.metadata.target_ids
}

/// Ensure `target` is one of the report's target ids (exact match).
pub fn ensure_target(report: &Report, target: &str) -> Result<(), ExportError> {
    let valid = valid_targets(report);
    if valid.iter().any(|t| t == target) {
        Ok(())
    } else {
        Err(ExportError::InvalidTarget {
            target: target.to_string(),
            valid: valid.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{"metadata":{"targetIds":["T1","T2"]},"projects":[],"rules":{}}"#;

    #[test]
    fn test_parse_minimal() {
        let r = parse_report(MINIMAL.as_bytes()).unwrap();
        assert_eq!(valid_targets(&r), &["T1".to_string(), "T2".to_string()]);
        assert!(r.projects.is_empty());
    }

    #[test]
    fn test_parse_skips_utf8_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(MINIMAL.as_bytes());
        assert!(parse_report(&bytes).is_ok());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_report(b"{\"metadata\": ").unwrap_err();
        assert!(matches!(err, ExportError::InvalidJson(_)));
    }

    #[test]
    fn test_missing_keys_in_order() {
        let cases: [(&str, &str); 5] = [
            (r#"{"projects":[],"rules":{}}"#, "metadata"),
            (r#"{"metadata":{},"projects":[],"rules":{}}"#, "metadata.targetIds"),
            (r#"{"metadata":{"targetIds":[]},"rules":{}}"#, "projects"),
            (r#"{"metadata":{"targetIds":[]},"projects":[]}"#, "rules"),
            // Everything missing: the first check wins.
            (r#"{}"#, "metadata"),
        ];
        for (doc, key) in cases {
            match parse_report(doc.as_bytes()) {
                Err(ExportError::MissingKey(k)) => assert_eq!(k, key, "doc={doc}"),
                other => panic!("expected MissingKey({key}) for {doc}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_object_root_is_missing_metadata() {
        let err = parse_report(b"[1,2,3]").unwrap_err();
        assert!(matches!(err, ExportError::MissingKey("metadata")));
    }

    #[test]
    fn test_wrong_type_fails_at_deserialization() {
        let doc = r#"{"metadata":{"targetIds":"T1"},"projects":[],"rules":{}}"#;
        let err = parse_report(doc.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::InvalidJson(_)));
    }

    #[test]
    fn test_ensure_target() {
        let r = parse_report(MINIMAL.as_bytes()).unwrap();
        assert!(ensure_target(&r, "T2").is_ok());
        match ensure_target(&r, "t1") {
            Err(ExportError::InvalidTarget { target, valid }) => {
                assert_eq!(target, "t1");
                assert_eq!(valid, vec!["T1".to_string(), "T2".to_string()]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_load_report_read_error_is_io() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "boom"))
            }
        }
        assert!(matches!(load_report(Broken), Err(ExportError::Io(_))));
    }
}
