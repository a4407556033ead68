//! Configuration discovery and effective settings resolution.
//!
//! assess-csv reads `assess-csv.toml|yaml|yml` from the current directory
//! (or the closest ancestor, stopping at a `.git` directory) unless an
//! explicit `--config` path is given, and merges it with CLI flags to
//! produce an `Effective` config.
//! Defaults:
//! - `input`, `target`, `output`: unset
//! - `excel`: false
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::cli::Cli;
use crate::error::ExportError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["assess-csv.toml", "assess-csv.yaml", "assess-csv.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq, Eq)]
/// Root configuration loaded from `assess-csv.toml|yaml`.
pub struct ExportConfig {
    pub input: Option<String>,
    pub target: Option<String>,
    pub output: Option<String>,
    pub excel: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fully-resolved settings used by the export after applying precedence.
pub struct Effective {
    pub input: Option<PathBuf>,
    pub target: Option<String>,
    pub output: Option<PathBuf>,
    pub excel: bool,
    pub list_targets: bool,
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding one of the config names, or at a
/// directory containing `.git`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let p = cur.join(name);
            if p.is_file() {
                return Some(p);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load an `ExportConfig` from `path`, choosing the parser by extension.
pub fn load_config(path: &Path) -> Result<ExportConfig, ExportError> {
    let invalid = |message: String| ExportError::Config {
        path: path.to_path_buf(),
        message,
    };
    let s = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|e| invalid(e.to_string()))
    } else {
        toml::from_str(&s).map_err(|e| invalid(e.to_string()))
    }
}

/// Resolve `Effective` by merging CLI flags, the config file, and defaults.
///
/// `cwd` is where discovery starts when no explicit `--config` is passed.
pub fn resolve_effective(cli: &Cli, cwd: &Path) -> Result<Effective, ExportError> {
    let cfg_path = match cli.config.as_ref() {
        Some(p) => Some(p.clone()),
        None => find_config(cwd),
    };
    let cfg = match cfg_path.as_ref() {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config(p)?
        }
        None => ExportConfig::default(),
    };

    let input = cli
        .input
        .clone()
        .or_else(|| cfg.input.map(PathBuf::from));
    let target = cli.target.clone().or(cfg.target);
    let output = cli
        .output
        .clone()
        .or_else(|| cfg.output.map(PathBuf::from));
    // Flags can only switch excel on; the config supplies the default.
    let excel = cli.excel || cfg.excel.unwrap_or(false);

    Ok(Effective {
        input,
        target,
        output,
        excel,
        list_targets: cli.list_targets,
    })
}
