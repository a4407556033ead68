//! Error types and exit codes for assess-csv.

use std::path::PathBuf;

/// Exit codes. These are a process contract; do not renumber.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Invalid or missing arguments.
    pub const INVALID_ARGS: i32 = 1;
    /// Input file does not exist.
    pub const INPUT_NOT_FOUND: i32 = 2;
    /// Input is not valid JSON or lacks required structure.
    pub const INVALID_JSON: i32 = 3;
    /// Target not listed in the report.
    pub const INVALID_TARGET: i32 = 4;
    /// Read or write failure.
    pub const IO_ERROR: i32 = 5;
}

/// Errors that can occur while exporting a report.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("no input file specified (use --input)")]
    MissingInput,

    #[error("no target specified (use --target or --list-targets)")]
    MissingTarget,

    #[error("target must not be empty")]
    EmptyTarget,

    #[error("invalid configuration file {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("input file does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("input is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("input is not valid JSON: missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("invalid target '{target}'. Valid targets: {}", .valid.join(", "))]
    InvalidTarget { target: String, valid: Vec<String> },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error: {0}")]
    Csv(#[from] csv::Error),
}

/// Map an error to its exit code.
pub fn exit_code(err: &ExportError) -> i32 {
    match err {
        ExportError::MissingInput => codes::INVALID_ARGS,
        ExportError::MissingTarget => codes::INVALID_ARGS,
        ExportError::EmptyTarget => codes::INVALID_ARGS,
        ExportError::Config { .. } => codes::INVALID_ARGS,
        ExportError::InputNotFound(_) => codes::INPUT_NOT_FOUND,
        ExportError::InvalidJson(_) => codes::INVALID_JSON,
        ExportError::MissingKey(_) => codes::INVALID_JSON,
        ExportError::InvalidTarget { .. } => codes::INVALID_TARGET,
        ExportError::Io(_) => codes::IO_ERROR,
        ExportError::Csv(_) => codes::IO_ERROR,
    }
}
