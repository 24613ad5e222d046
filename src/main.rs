// SPDX-License-Identifier: PMPL-1.0-or-later
//! check-chameleon CLI - accessibility lint for Chameleon page templates
//!
//! Meant to run as a pre-commit hook: pass the changed template files and
//! the process exits with 1 when anything is reported.

use check_chameleon::diagnostic::exit_code;
use check_chameleon::report::{generate_report, OutputFormat};
use check_chameleon::scanner::Runner;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Check Chameleon templates for common accessibility mistakes
#[derive(Parser)]
#[command(name = "check-chameleon")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Template files (or directories) to check
    files: Vec<PathBuf>,

    /// Skip the accessibility checks for files whose path starts with this
    /// prefix; they are still checked for well-formedness
    #[arg(long = "a11y-lint-exclude", value_name = "PREFIX")]
    a11y_lint_exclude: Option<String>,

    /// Output format
    #[arg(long, default_value = "text")]
    format: FormatArg,

    /// Enable verbose logging
    #[arg(long, short)]
    verbose: bool,
}

/// Output format CLI argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// One line per finding
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI
    Sarif,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Sarif => OutputFormat::Sarif,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("check_chameleon=debug")
    } else {
        EnvFilter::new("check_chameleon=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = Runner::default().with_exclude(cli.a11y_lint_exclude);
    let diagnostics = runner.run(&cli.files)?;

    if let Some(report) = generate_report(&diagnostics, cli.format.into()) {
        println!("{}", report);
    }

    let code = exit_code(&diagnostics);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
