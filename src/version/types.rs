use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::identifier::Identifier;

/// A parsed Semantic Versioning 2.0.0 version
///
/// Values are created only by parsing and cannot be mutated afterwards.
///
/// Equality, ordering and hashing follow precedence: build metadata is ignored,
/// so `1.0.0+a == 1.0.0+b`. Deduplicating a collection by `==` or by hash merges
/// versions that differ only in build metadata. Use [`Version::identical`] for
/// an exact match.
#[derive(Debug, Clone)]
pub struct Version {
    pub(super) major: u64,
    pub(super) minor: u64,
    pub(super) patch: u64,
    pub(super) prerelease: Vec<Identifier>,
    pub(super) build: Vec<String>,
}

impl Version {
    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Prerelease identifiers, empty for a normal release
    pub fn prerelease(&self) -> &[Identifier] {
        &self.prerelease
    }

    /// Build metadata identifiers, empty when absent
    pub fn build(&self) -> &[String] {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Exact match including build metadata
    pub fn identical(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
            && self.build == other.build
    }
}

/// Renders the canonical form, build metadata included
impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            f.write_str("-")?;
            write_dotted(f, &self.prerelease)?;
        }
        if !self.build.is_empty() {
            f.write_str("+")?;
            write_dotted(f, &self.build)?;
        }
        Ok(())
    }
}

fn write_dotted<T: fmt::Display>(f: &mut fmt::Formatter<'_>, idents: &[T]) -> fmt::Result {
    for (i, ident) in idents.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        write!(f, "{}", ident)?;
    }
    Ok(())
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("0.0.0")]
    #[case("1.2.3-alpha.1")]
    #[case("1.2.3+build.001")]
    #[case("1.0.0-x-y-z.--+exp.sha.5114f85")]
    fn display_renders_canonical_form(#[case] input: &str) {
        let version = Version::parse(input).unwrap();
        assert_eq!(version.to_string(), input);
    }

    #[test]
    fn accessors_expose_parsed_components() {
        let version = Version::parse("3.14.15-rc.2+linux").unwrap();

        assert_eq!(version.major(), 3);
        assert_eq!(version.minor(), 14);
        assert_eq!(version.patch(), 15);
        assert_eq!(
            version.prerelease(),
            &[
                Identifier::AlphaNumeric("rc".to_string()),
                Identifier::Numeric(2)
            ]
        );
        assert_eq!(version.build(), &["linux".to_string()]);
        assert!(version.is_prerelease());
    }

    #[test]
    fn identical_distinguishes_build_metadata() {
        let plain = Version::parse("1.4.1").unwrap();
        let meta = Version::parse("1.4.1+meta").unwrap();

        assert_eq!(plain, meta);
        assert!(!plain.identical(&meta));
        assert!(meta.identical(&Version::parse("1.4.1+meta").unwrap()));
    }

    #[test]
    fn serde_uses_string_form() {
        let version = Version::parse("2.0.0-beta+exp").unwrap();

        assert_eq!(serde_json::to_value(&version).unwrap(), json!("2.0.0-beta+exp"));

        let restored: Version = serde_json::from_value(json!("2.0.0-beta+exp")).unwrap();
        assert!(restored.identical(&version));
    }

    #[test]
    fn deserialize_rejects_invalid_version() {
        let err = serde_json::from_value::<Version>(json!("1.0")).unwrap_err();
        assert!(err.to_string().contains("core must have exactly 3"));
    }
}
