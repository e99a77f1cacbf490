// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use colored::Colorize;

fn main() -> ExitCode {
    match linkpost_cli::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
