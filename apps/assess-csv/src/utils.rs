//! Colored diagnostic prefixes shared by the printers and the binary.

use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// Colors are used only on a terminal and when `NO_COLOR` is unset.
pub fn use_colors_stderr() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

pub fn use_colors_stdout() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn error_prefix() -> String {
    if use_colors_stderr() {
        "Error:".red().bold().to_string()
    } else {
        "Error:".to_string()
    }
}

pub fn info_prefix() -> String {
    if use_colors_stderr() {
        "Info:".blue().bold().to_string()
    } else {
        "Info:".to_string()
    }
}
