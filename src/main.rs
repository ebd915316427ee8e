//! Reportline - status output for test-run reporters
//!
//! CLI entry point: renders summaries, compacted paths and wrapped text.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use reportline::{
    print_display_name, render_summary, trim_and_format_path, visible_width, wrap_ansi_string,
    AggregatedResult, CurrentTestCase, ProjectConfig, ReporterConfig, Styler, SummaryOptions,
};

/// Terminal status output for test-run reporters
///
/// Renders the suites/tests/snapshots/time summary, compacts test file
/// paths to the terminal width, and wraps styled text without breaking
/// color escape sequences.
#[derive(Parser, Debug)]
#[command(name = "reportline", version, about)]
struct Cli {
    /// Path to the reporter.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// When to emit color escape sequences
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the summary for an aggregate results file
    Summary {
        /// Aggregate results JSON from the test engine
        #[arg(long)]
        results: PathBuf,

        /// JSON array of test cases reported since the aggregate was taken
        #[arg(long)]
        current: Option<PathBuf>,

        /// Terminal columns (overrides the config file)
        #[arg(long)]
        width: Option<usize>,

        /// Estimated run time in seconds (overrides the config file)
        #[arg(long)]
        estimated: Option<f64>,

        /// Show whole seconds only
        #[arg(long)]
        round_time: bool,
    },

    /// Print a test file path compacted to the terminal width
    Path {
        /// Test file to display
        test_path: PathBuf,

        /// Terminal columns
        #[arg(long, default_value_t = 80)]
        columns: usize,

        /// Columns reserved in front of the path
        #[arg(long, default_value_t = 0)]
        pad: usize,
    },

    /// Wrap stdin to a width, keeping escape sequences intact
    Wrap {
        /// Terminal columns; 0 disables wrapping
        #[arg(long, default_value_t = 80)]
        width: usize,
    },
}

/// When to color output
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// Resolve the styler for this process.
fn resolve_styler(choice: ColorChoice) -> Styler {
    match choice {
        ColorChoice::Auto => Styler::detect(),
        ColorChoice::Always => Styler::new(true),
        ColorChoice::Never => Styler::plain(),
    }
}

/// Load the config file if one was given, defaults otherwise.
fn load_config(path: Option<&Path>) -> Result<ReporterConfig> {
    let Some(path) = path else {
        return Ok(ReporterConfig::default());
    };
    ReporterConfig::from_path(path)
        .with_context(|| format!("Failed to load config from '{}'", path.display()))
}

/// Resolve a relative project root against the process working directory.
fn anchor_project(project: &mut ProjectConfig) -> Result<()> {
    if project.root_dir.is_relative() {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        project.root_dir = cwd.join(&project.root_dir);
    }
    Ok(())
}

/// Apply CLI overrides on top of the configured summary options.
fn summary_options(
    config: &ReporterConfig,
    width: Option<usize>,
    estimated: Option<f64>,
    round_time: bool,
    current_test_cases: Vec<CurrentTestCase>,
) -> SummaryOptions {
    SummaryOptions {
        round_time: round_time || config.summary.round_time,
        estimated_time: estimated.unwrap_or(config.summary.estimated_time),
        width: width.unwrap_or(config.summary.width),
        current_test_cases,
    }
}

/// Padding for a path printed after a badge: the badge plus one space.
fn badge_pad(badge: &str, pad: usize) -> usize {
    if badge.is_empty() {
        pad
    } else {
        pad + visible_width(badge) + 1
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn run_summary(
    config: &ReporterConfig,
    styler: Styler,
    results: &Path,
    current: Option<&Path>,
    mut options: SummaryOptions,
) -> Result<()> {
    let aggregate = AggregatedResult::from_json(&read_file(results)?)
        .with_context(|| format!("Failed to parse aggregate results in {}", results.display()))?;

    if let Some(path) = current {
        options.current_test_cases = CurrentTestCase::list_from_json(&read_file(path)?)
            .with_context(|| format!("Failed to parse test cases in {}", path.display()))?;
    }
    debug!(
        width = options.width,
        estimated = options.estimated_time,
        in_flight = options.current_test_cases.len(),
        root = %config.project.root_dir.display(),
        "Rendering summary"
    );

    let summary = render_summary(&aggregate, &options, chrono::Utc::now(), styler);
    println!("{}", wrap_ansi_string(&summary, options.width));
    Ok(())
}

fn run_path(
    config: &ReporterConfig,
    styler: Styler,
    test_path: &Path,
    columns: usize,
    pad: usize,
) -> Result<()> {
    let badge = print_display_name(&config.project, styler);
    let pad = badge_pad(&badge, pad);
    let path = trim_and_format_path(pad, &config.project, test_path, columns, styler)
        .with_context(|| format!("Cannot fit {} into {columns} columns", test_path.display()))?;

    if badge.is_empty() {
        println!("{path}");
    } else {
        println!("{badge} {path}");
    }
    Ok(())
}

fn run_wrap(width: usize) -> Result<()> {
    let input = std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?;
    print!("{}", wrap_ansi_string(&input, width));
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reportline=warn")),
        )
        .init();

    let cli = Cli::parse();

    let styler = resolve_styler(cli.color);
    let mut config = load_config(cli.config.as_deref())?;
    anchor_project(&mut config.project)?;

    match cli.command {
        Command::Summary {
            results,
            current,
            width,
            estimated,
            round_time,
        } => {
            let options = summary_options(&config, width, estimated, round_time, Vec::new());
            run_summary(&config, styler, &results, current.as_deref(), options)
        }
        Command::Path {
            test_path,
            columns,
            pad,
        } => run_path(&config, styler, &test_path, columns, pad),
        Command::Wrap { width } => run_wrap(width),
    }
}
