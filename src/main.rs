use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use semver_order::cli::{self, OutputFormat, SortOptions};
use semver_order::{config, logging};

#[derive(Parser)]
#[command(name = "semver-order")]
#[command(version, about = "Parse and order Semantic Versioning 2.0.0 versions")]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a version and print its components
    Parse { version: String },
    /// Compare two versions by precedence
    Compare { left: String, right: String },
    /// Sort versions by precedence, reading stdin lines when none are given
    Sort {
        versions: Vec<String>,
        /// Highest precedence first
        #[arg(long)]
        reverse: bool,
        /// Drop versions of equal precedence (including build metadata variants)
        #[arg(long)]
        dedup: bool,
        /// Skip invalid versions instead of failing
        #[arg(long)]
        skip_invalid: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = config::load(args.config.as_deref())?;
    let _guard = logging::init(&config.log, args.log_level.as_deref())?;
    let format = args.format.unwrap_or(config.output.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Parse { version } => cli::parse_command(&version, format, &mut out),
        Command::Compare { left, right } => cli::compare_command(&left, &right, format, &mut out),
        Command::Sort {
            versions,
            reverse,
            dedup,
            skip_invalid,
        } => {
            let versions = if versions.is_empty() {
                read_stdin_lines()?
            } else {
                versions
            };
            let options = SortOptions {
                reverse,
                dedup,
                skip_invalid: skip_invalid || config.sort.skip_invalid,
            };
            cli::sort_command(&versions, options, format, &mut out)
        }
    }
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read versions from stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            versions.push(line.to_string());
        }
    }
    Ok(versions)
}
