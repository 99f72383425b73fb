use std::fmt;

use thiserror::Error;

/// Error returned when a string does not match the version grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version '{input}': {reason}")]
pub struct InvalidVersion {
    input: String,
    reason: InvalidReason,
}

impl InvalidVersion {
    pub(crate) fn new(input: &str, reason: InvalidReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejected input, exactly as given
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The grammar rule the input violated
    pub fn reason(&self) -> &InvalidReason {
        &self.reason
    }
}

/// Grammar rule violated by a rejected version string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("version string is empty")]
    Empty,

    #[error("core must have exactly 3 numeric components, found {0}")]
    CoreComponentCount(usize),

    #[error("{0} component is empty")]
    EmptyComponent(Component),

    #[error("{0} component is not a number")]
    NonNumericComponent(Component),

    #[error("{0} component has a leading zero")]
    LeadingZero(Component),

    #[error("{0} component does not fit in 64 bits")]
    Overflow(Component),

    #[error("{0} identifier is empty")]
    EmptyIdentifier(Section),

    #[error("illegal character '{ch}' in {section}")]
    IllegalCharacter { section: Section, ch: char },

    #[error("prerelease identifier '{0}' has a leading zero")]
    PrereleaseLeadingZero(String),

    #[error("prerelease identifier '{0}' does not fit in 64 bits")]
    PrereleaseOverflow(String),
}

/// One of the three fields of the core version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Dot-separated section of a version string that holds identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Prerelease,
    Build,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Prerelease => "prerelease",
            Section::Build => "build metadata",
        };
        f.write_str(name)
    }
}
