//! Command implementations behind the `semver-order` binary
//!
//! Each command writes its result to the given writer so it can be exercised
//! without a terminal.

use std::cmp::Ordering;
use std::io::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::version::{Identifier, Version, collection, compare};

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Options of the `sort` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub reverse: bool,
    pub dedup: bool,
    pub skip_invalid: bool,
}

#[derive(Serialize)]
struct ParsedVersion<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: &'a [Identifier],
    build: &'a [String],
}

#[derive(Serialize)]
struct Comparison<'a> {
    left: &'a Version,
    right: &'a Version,
    ordering: &'static str,
}

/// Print the components of a single version
pub fn parse_command(input: &str, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let version = Version::parse(input)?;
    debug!("Parsed '{}'", input);

    match format {
        OutputFormat::Text => {
            writeln!(out, "version:    {}", version)?;
            writeln!(out, "major:      {}", version.major())?;
            writeln!(out, "minor:      {}", version.minor())?;
            writeln!(out, "patch:      {}", version.patch())?;
            writeln!(out, "prerelease: {}", dotted_or_none(version.prerelease()))?;
            writeln!(out, "build:      {}", dotted_or_none(version.build()))?;
        }
        OutputFormat::Json => {
            let parsed = ParsedVersion {
                version: &version,
                major: version.major(),
                minor: version.minor(),
                patch: version.patch(),
                prerelease: version.prerelease(),
                build: version.build(),
            };
            serde_json::to_writer(&mut *out, &parsed)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print the precedence relation between two versions
pub fn compare_command(
    left: &str,
    right: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let left = Version::parse(left)?;
    let right = Version::parse(right)?;
    let ordering = compare(&left, &right);

    match format {
        OutputFormat::Text => {
            let symbol = match ordering {
                Ordering::Less => "<",
                Ordering::Equal => "==",
                Ordering::Greater => ">",
            };
            writeln!(out, "{} {} {}", left, symbol, right)?;
        }
        OutputFormat::Json => {
            let comparison = Comparison {
                left: &left,
                right: &right,
                ordering: match ordering {
                    Ordering::Less => "less",
                    Ordering::Equal => "equal",
                    Ordering::Greater => "greater",
                },
            };
            serde_json::to_writer(&mut *out, &comparison)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Print versions sorted by precedence, one per line or as a JSON array
pub fn sort_command(
    inputs: &[String],
    options: SortOptions,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut versions = if options.skip_invalid {
        collection::parse_valid(inputs)
    } else {
        collection::parse_all(inputs)?
    };

    if options.reverse {
        collection::sort_desc(&mut versions);
    } else {
        collection::sort(&mut versions);
    }
    if options.dedup {
        collection::dedup(&mut versions);
    }
    info!("Sorted {} of {} versions", versions.len(), inputs.len());

    match format {
        OutputFormat::Text => {
            for version in &versions {
                writeln!(out, "{}", version)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &versions)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn dotted_or_none<T: ToString>(idents: &[T]) -> String {
    if idents.is_empty() {
        return "(none)".to_string();
    }
    idents
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
