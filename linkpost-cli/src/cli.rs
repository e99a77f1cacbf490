use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use linkpost_content::{
    Category, ContentTheme, HashtagStrategy, PromptTemplate, hooks, image_prompts,
    next_posting_slot, structures,
};
use linkpost_validator::{QualityChecker, QualityConfig, check_posts, output};

use crate::inputs::collect_inputs;
use crate::logging;

/// Exit code for `check --strict` when a post fails a check.
pub const EXIT_CHECK_FAILED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "linkpost", version, about = "LinkedIn post content tables and quality checks")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check post text for length, call to action, emoji and engagement wording
    Check(CheckArgs),
    /// Print the effective checker configuration as JSON
    Config(CheckerArgs),
    /// Print opening hooks for a category
    Hooks { category: Category },
    /// Print post structures for a category
    Structures { category: Category },
    /// Print image generation prompts for a category
    Images { category: Category },
    /// Print the hashtags of a strategy
    Hashtags { strategy: HashtagStrategy },
    /// Render a prompt template
    Prompt {
        /// post, hashtags or image
        template: PromptTemplate,
        /// Placeholder value as key=value; repeatable
        #[arg(long = "var", value_parser = parse_var)]
        vars: Vec<(String, String)>,
    },
    /// Print the next optimal posting slot and its theme
    Schedule {
        /// Reference instant (RFC 3339); defaults to now
        #[arg(long)]
        after: Option<DateTime<Utc>>,
    },
}

/// Options that shape the checker.
#[derive(Debug, Args)]
pub struct CheckerArgs {
    /// YAML or JSON checker configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the maximum post length
    #[arg(long)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Files or directories to check; `-` or none reads stdin
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub checker: CheckerArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Exit with status 2 if any post fails a check
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Parse arguments, set up logging and run the selected command.
///
/// # Errors
/// Returns an error if a command fails.
pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    execute(&cli.command, &mut std::io::stdout().lock())
}

/// Run `command`, writing results to `out`.
///
/// # Errors
/// Returns an error if configuration, input or output fails.
pub fn execute(command: &Command, out: &mut dyn Write) -> Result<ExitCode> {
    match command {
        Command::Check(args) => return run_check(args, out),
        Command::Config(args) => {
            let config = effective_config(args)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        Command::Hooks { category } => write_lines(out, hooks(*category))?,
        Command::Structures { category } => write_lines(out, structures(*category))?,
        Command::Images { category } => write_lines(out, image_prompts(*category))?,
        Command::Hashtags { strategy } => write_lines(out, strategy.hashtags())?,
        Command::Prompt { template, vars } => {
            let vars: HashMap<String, String> = vars.iter().cloned().collect();
            write!(out, "{}", template.render(&vars)?)?;
        }
        Command::Schedule { after } => {
            let after = after.unwrap_or_else(Utc::now);
            let slot = next_posting_slot(after)
                .with_context(|| format!("No posting slot after {after}"))?;
            let theme = ContentTheme::for_day(slot.weekday()).map_or("none", ContentTheme::as_str);
            writeln!(
                out,
                "{} ({}, theme: {theme})",
                slot.to_rfc3339(),
                slot.weekday()
            )?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(args: &CheckArgs, out: &mut dyn Write) -> Result<ExitCode> {
    let config = effective_config(&args.checker)?;
    let checker = QualityChecker::new(&config)?;
    let inputs = collect_inputs(&args.paths)?;
    let report = check_posts(&checker, inputs);

    match args.format {
        OutputFormat::Human => output::write_human(&report, out)?,
        OutputFormat::Json => output::write_json(&report, out)?,
    }

    if args.strict && !report.ok {
        tracing::warn!(failed = report.failed_count(), "strict check failed");
        return Ok(ExitCode::from(EXIT_CHECK_FAILED));
    }
    Ok(ExitCode::SUCCESS)
}

/// Configuration file (if any) with command-line overrides applied.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub fn effective_config(args: &CheckerArgs) -> Result<QualityConfig> {
    let mut config = match &args.config {
        Some(path) => QualityConfig::from_path(path)?,
        None => QualityConfig::default(),
    };
    if let Some(max_length) = args.max_length {
        config.max_length = max_length;
    }
    Ok(config)
}

fn write_lines(out: &mut dyn Write, lines: &[&str]) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Parse a `key=value` prompt variable.
///
/// # Errors
/// Returns a message if there is no `=` or the key is empty.
pub fn parse_var(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_owned(), value.to_owned()))
        }
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}
