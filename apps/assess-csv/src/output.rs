//! Console rendering for target listings and export summaries.
//!
//! CSV data itself is written by `export`; these printers only produce the
//! human-facing lines around it. Rendering is split from printing so the
//! text can be checked in tests.

use crate::error::ExportError;
use crate::models::ExportSummary;
use owo_colors::OwoColorize;
use std::io::Write;

/// Lines printed by `--list-targets`: a header, then one target per line.
pub fn compose_targets(targets: &[String]) -> Vec<String> {
    let mut lines = Vec::with_capacity(targets.len() + 1);
    lines.push("Available targets:".to_string());
    lines.extend(targets.iter().cloned());
    lines
}

/// Write the target listing to `out` (stdout in the binary).
pub fn print_targets<W: Write>(out: &mut W, targets: &[String]) -> Result<(), ExportError> {
    let mut lines = compose_targets(targets).into_iter();
    if let Some(header) = lines.next() {
        if crate::utils::use_colors_stdout() {
            writeln!(out, "{}", header.bold())?;
        } else {
            writeln!(out, "{}", header)?;
        }
    }
    for t in lines {
        writeln!(out, "{}", t)?;
    }
    out.flush()?;
    Ok(())
}

/// Summary lines for a finished export.
pub fn compose_summary(summary: &ExportSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(path) = summary.output.as_ref() {
        lines.push(format!("CSV written to: {}", path.display()));
    }
    lines.push(format!(
        "Total incidents for target '{}': {}",
        summary.target, summary.rows
    ));
    lines
}

/// Write the export summary.
///
/// Progress lines belong on stdout (`out`). When the CSV itself went to
/// stdout they are written to `err` instead, with an `Info:` prefix, so the
/// CSV stream on stdout stays parseable. This intentionally moves them off
/// stdout in that one mode.
pub fn print_summary<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    summary: &ExportSummary,
) -> Result<(), ExportError> {
    let lines = compose_summary(summary);
    if summary.output.is_some() {
        let color = crate::utils::use_colors_stdout();
        for l in lines {
            if color {
                writeln!(out, "{}", l.green())?;
            } else {
                writeln!(out, "{}", l)?;
            }
        }
        out.flush()?;
    } else {
        for l in lines {
            writeln!(err, "{} {}", crate::utils::info_prefix(), l)?;
        }
        err.flush()?;
    }
    Ok(())
}
