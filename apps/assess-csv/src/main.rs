//! assess-csv binary entry point.
//! Parses flags, resolves configuration, runs the export, and maps errors
//! to exit codes.

use assess_csv::cli::Cli;
use assess_csv::convert::{run_export, Outcome};
use assess_csv::error::{codes, exit_code};
use assess_csv::{config, output, utils};
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise warn, or debug with -v. Always stderr.
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => codes::SUCCESS,
                // Usage errors share the invalid-arguments code; clap's own
                // default (2) means "input not found" here.
                _ => codes::INVALID_ARGS,
            };
            std::process::exit(code);
        }
    };
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let result = config::resolve_effective(&cli, &cwd)
        .and_then(|eff| run_export(&eff))
        .and_then(|outcome| {
            let mut out = std::io::stdout().lock();
            match outcome {
                Outcome::Targets(targets) => output::print_targets(&mut out, &targets),
                Outcome::Exported(summary) => {
                    output::print_summary(&mut out, &mut std::io::stderr().lock(), &summary)
                }
            }
        });
    if let Err(err) = result {
        let _ = writeln!(std::io::stderr(), "{} {}", utils::error_prefix(), err);
        std::process::exit(exit_code(&err));
    }
}
