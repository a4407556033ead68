//! CLI argument parsing via `clap`.
//!
//! Every value is optional at the parser level: required-ness depends on
//! `--list-targets` and on the config file, and is enforced by the export
//! pipeline so that missing arguments map to exit code 1.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "assess-csv",
    version,
    about = "Export assessment report incidents to CSV",
    long_about = "assess-csv — project the incidents of a JSON assessment report that apply to one target into a CSV file.\n\nConfiguration precedence: CLI > assess-csv.toml > defaults.",
    after_help = "Examples:\n  assess-csv --input report.json --list-targets\n  assess-csv -i report.json -t AppService.Linux -o incidents.csv\n  assess-csv -i report.json -t AKS.Linux --excel > incidents.csv\n\nExit codes:\n  0 success, 1 invalid arguments, 2 input not found,\n  3 invalid JSON, 4 invalid target, 5 I/O error"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(short = 'i', long, value_name = "PATH", help = "Path to the JSON assessment report")]
    pub input: Option<PathBuf>,
    #[arg(short = 't', long, value_name = "NAME", help = "Target to export (see --list-targets)")]
    pub target: Option<String>,
    #[arg(short = 'o', long, value_name = "PATH", help = "Output CSV file (default: stdout)")]
    pub output: Option<PathBuf>,
    #[arg(short = 'l', long, action = clap::ArgAction::SetTrue, help = "List valid targets and exit")]
    pub list_targets: bool,
    #[arg(short = 'e', long, action = clap::ArgAction::SetTrue, help = "Prefix output with a UTF-8 BOM for Excel")]
    pub excel: bool,
    #[arg(long, value_name = "PATH", help = "Config file (default: discover assess-csv.toml)")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue, help = "Enable debug logging on stderr")]
    pub verbose: bool,
}
