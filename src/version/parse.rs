//! Version string parsing
//!
//! Splits the input at the first `+` (build metadata) and then at the first `-`
//! (prerelease), validates each part against the grammar in [`grammar`] and
//! assembles a [`Version`]. The whole input must match; nothing is trimmed,
//! padded or coerced.
//!
//! [`grammar`]: crate::version::grammar

use std::str::FromStr;

use crate::version::error::{Component, InvalidReason, InvalidVersion};
use crate::version::grammar;
use crate::version::types::Version;

/// Parse a version string such as `1.0.0-alpha.1+build.5`
pub fn parse(input: &str) -> Result<Version, InvalidVersion> {
    parse_parts(input).map_err(|reason| InvalidVersion::new(input, reason))
}

fn parse_parts(input: &str) -> Result<Version, InvalidReason> {
    if input.is_empty() {
        return Err(InvalidReason::Empty);
    }

    let (rest, build) = match input.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (input, None),
    };
    let (core, prerelease) = match rest.split_once('-') {
        Some((core, prerelease)) => (core, Some(prerelease)),
        None => (rest, None),
    };

    let fields: Vec<&str> = core.split('.').collect();
    let [major, minor, patch] = fields.as_slice() else {
        return Err(InvalidReason::CoreComponentCount(fields.len()));
    };

    let major = grammar::numeric_component(major, Component::Major)?;
    let minor = grammar::numeric_component(minor, Component::Minor)?;
    let patch = grammar::numeric_component(patch, Component::Patch)?;

    let prerelease = match prerelease {
        Some(section) => section
            .split('.')
            .map(grammar::prerelease_identifier)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };
    let build = match build {
        Some(section) => section
            .split('.')
            .map(grammar::build_identifier)
            .collect::<Result<Vec<_>, _>>()?,
        None => Vec::new(),
    };

    Ok(Version {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

impl Version {
    /// Parse a version string. See [`parse`].
    pub fn parse(input: &str) -> Result<Self, InvalidVersion> {
        parse(input)
    }
}

impl FromStr for Version {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = InvalidVersion;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}
