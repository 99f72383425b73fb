//! Precedence ordering
//!
//! [`compare`] is the single source of truth; `Ord`, `PartialOrd`, `PartialEq`,
//! `Eq` and `Hash` for [`Version`] are all derived from it, so every relational
//! operator agrees with it. Build metadata never takes part.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::version::identifier::Identifier;
use crate::version::types::Version;

/// Compare two versions by precedence
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| compare_prerelease(&a.prerelease, &b.prerelease))
}

/// An empty prerelease denotes a normal release, which outranks any prerelease
/// of the same core version.
fn compare_prerelease(a: &[Identifier], b: &[Identifier]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a
            .iter()
            .zip(b)
            .map(|(x, y)| x.cmp(y))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.len().cmp(&b.len())),
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashSet;

    fn v(input: &str) -> Version {
        Version::parse(input).unwrap()
    }

    #[rstest]
    #[case("1.0.0", "2.0.0", Ordering::Less)]
    #[case("1.0.0", "1.42.0", Ordering::Less)]
    #[case("1.2.0", "1.2.42", Ordering::Less)]
    #[case("2.0.0", "1.99.99", Ordering::Greater)]
    #[case("1.10.0", "1.9.0", Ordering::Greater)] // numeric, not lexical
    #[case("1.0.0-rc.1", "1.0.0", Ordering::Less)]
    #[case("1.0.0", "1.0.0-rc.1", Ordering::Greater)]
    #[case("1.1.0-alpha", "1.2.0-alpha.1", Ordering::Less)]
    #[case("1.0.0-alpha", "1.0.0-alpha", Ordering::Equal)]
    #[case("1.0.0-2", "1.0.0-abc", Ordering::Less)]
    #[case("1.0.0-10", "1.0.0-9", Ordering::Greater)]
    #[case("1.0.0-alpha.1", "1.0.0-alpha.1.0", Ordering::Less)]
    #[case("1.4.1", "1.4.1+meta", Ordering::Equal)]
    #[case("1.0.0-beta+exp.sha.5114f85", "1.0.0-beta+other", Ordering::Equal)]
    #[case("1.0.0+zzz", "1.0.1+aaa", Ordering::Less)]
    fn test_compare(#[case] left: &str, #[case] right: &str, #[case] expected: Ordering) {
        assert_eq!(compare(&v(left), &v(right)), expected);
    }

    #[test]
    fn prerelease_chain_is_strictly_increasing() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];

        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn relational_operators_agree_with_compare() {
        let a = v("1.0.0-alpha.1");
        let b = v("1.0.0-alpha.beta");

        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(a.cmp(&b), compare(&a, &b));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));
    }

    #[test]
    fn hash_ignores_build_metadata() {
        let set: HashSet<Version> = ["1.0.0+a", "1.0.0+b", "1.0.0", "1.0.0-rc"]
            .into_iter()
            .map(v)
            .collect();

        assert_eq!(set.len(), 2);
    }
}
