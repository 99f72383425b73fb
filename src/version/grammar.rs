//! Lexical rules of the version grammar
//!
//! ```text
//! numeric_id   := "0" | [1-9][0-9]*
//! alnum_id     := [0-9A-Za-z-]+    (at least one non-digit)
//! build_id     := [0-9A-Za-z-]+    (leading zeros allowed)
//! ```
//!
//! The patterns are compiled once per process and never mutated.

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::{Component, InvalidReason, Section};
use crate::version::identifier::Identifier;

/// Any character outside the identifier alphabet `[0-9A-Za-z-]`
static ILLEGAL_CHARACTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z-]").unwrap());

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

static NUMERIC_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:0|[1-9][0-9]*)$").unwrap());

/// Validate one field of the core version and return its value
pub(crate) fn numeric_component(field: &str, component: Component) -> Result<u64, InvalidReason> {
    if field.is_empty() {
        return Err(InvalidReason::EmptyComponent(component));
    }
    if !DIGITS.is_match(field) {
        return Err(InvalidReason::NonNumericComponent(component));
    }
    if !NUMERIC_IDENTIFIER.is_match(field) {
        return Err(InvalidReason::LeadingZero(component));
    }

    field
        .parse::<u64>()
        .map_err(|_| InvalidReason::Overflow(component))
}

/// Validate a prerelease identifier and classify it as numeric or alphanumeric
pub(crate) fn prerelease_identifier(ident: &str) -> Result<Identifier, InvalidReason> {
    check_alphabet(ident, Section::Prerelease)?;

    if !DIGITS.is_match(ident) {
        return Ok(Identifier::AlphaNumeric(ident.to_string()));
    }
    if !NUMERIC_IDENTIFIER.is_match(ident) {
        return Err(InvalidReason::PrereleaseLeadingZero(ident.to_string()));
    }

    ident
        .parse::<u64>()
        .map(Identifier::Numeric)
        .map_err(|_| InvalidReason::PrereleaseOverflow(ident.to_string()))
}

/// Validate a build metadata identifier. Digits-only identifiers may have leading zeros.
pub(crate) fn build_identifier(ident: &str) -> Result<String, InvalidReason> {
    check_alphabet(ident, Section::Build)?;
    Ok(ident.to_string())
}

fn check_alphabet(ident: &str, section: Section) -> Result<(), InvalidReason> {
    if ident.is_empty() {
        return Err(InvalidReason::EmptyIdentifier(section));
    }

    match ILLEGAL_CHARACTER
        .find(ident)
        .and_then(|m| m.as_str().chars().next())
    {
        Some(ch) => Err(InvalidReason::IllegalCharacter { section, ch }),
        None => Ok(()),
    }
}
