//! Helpers for working with many versions at once
//!
//! Everything here orders by [`compare`](crate::version::compare::compare), so
//! versions differing only in build metadata are treated as equal.

use tracing::{debug, warn};

use crate::version::error::InvalidVersion;
use crate::version::types::Version;

/// Parse every input, failing on the first invalid one
pub fn parse_all<I, S>(inputs: I) -> Result<Vec<Version>, InvalidVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|input| Version::parse(input.as_ref()))
        .collect()
}

/// Parse every input, skipping the invalid ones
pub fn parse_valid<I, S>(inputs: I) -> Vec<Version>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let versions: Vec<Version> = inputs
        .into_iter()
        .filter_map(|input| {
            Version::parse(input.as_ref())
                .inspect_err(|e| warn!("Skipping {}", e))
                .ok()
        })
        .collect();

    debug!("Parsed {} valid versions", versions.len());
    versions
}

/// Sort ascending by precedence. Stable: equal versions keep their input order.
pub fn sort(versions: &mut [Version]) {
    versions.sort();
}

/// Sort descending by precedence. Stable like [`sort`].
pub fn sort_desc(versions: &mut [Version]) {
    versions.sort_by(|a, b| b.cmp(a));
}

/// Remove consecutive versions of equal precedence, keeping the first of each run.
///
/// Call after sorting to drop every duplicate. Versions that differ only in
/// build metadata are duplicates.
pub fn dedup(versions: &mut Vec<Version>) {
    let before = versions.len();
    versions.dedup();
    if versions.len() != before {
        debug!("Removed {} duplicate versions", before - versions.len());
    }
}

/// Highest precedence version. Among equals the last one wins.
pub fn latest(versions: &[Version]) -> Option<&Version> {
    versions.iter().max()
}

/// Highest precedence version that is not a prerelease
pub fn latest_stable(versions: &[Version]) -> Option<&Version> {
    versions.iter().filter(|v| !v.is_prerelease()).max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rendered(versions: &[Version]) -> Vec<String> {
        versions.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_all_fails_on_first_invalid_input() {
        let err = parse_all(["1.0.0", "1.0", "01.0.0"]).unwrap_err();
        assert_eq!(err.input(), "1.0");
    }

    #[test]
    fn parse_valid_skips_invalid_inputs() {
        let versions = parse_valid(vec!["1.0.0", "1.0.1b", "2.0.0-rc.1", ""]);
        assert_eq!(rendered(&versions), vec!["1.0.0", "2.0.0-rc.1"]);
    }

    #[test]
    fn sort_orders_by_precedence() {
        let mut versions = parse_all([
            "1.0.0",
            "1.0.0-beta.11",
            "1.0.0-alpha",
            "1.0.0-rc.1",
            "1.0.0-beta.2",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-alpha.1",
        ])
        .unwrap();

        sort(&mut versions);

        assert_eq!(
            rendered(&versions),
            vec![
                "1.0.0-alpha",
                "1.0.0-alpha.1",
                "1.0.0-alpha.beta",
                "1.0.0-beta",
                "1.0.0-beta.2",
                "1.0.0-beta.11",
                "1.0.0-rc.1",
                "1.0.0",
            ]
        );
    }

    #[test]
    fn sort_is_stable_for_build_metadata_variants() {
        let mut versions = parse_all(["1.0.0+b", "0.9.0", "1.0.0+a"]).unwrap();

        sort(&mut versions);
        assert_eq!(rendered(&versions), vec!["0.9.0", "1.0.0+b", "1.0.0+a"]);

        sort_desc(&mut versions);
        assert_eq!(rendered(&versions), vec!["1.0.0+b", "1.0.0+a", "0.9.0"]);
    }

    #[test]
    fn dedup_merges_build_metadata_variants() {
        let mut versions = parse_all(["1.0.0+a", "1.0.0+b", "1.0.0-rc", "2.0.0"]).unwrap();
        sort(&mut versions);

        dedup(&mut versions);

        assert_eq!(rendered(&versions), vec!["1.0.0-rc", "1.0.0+a", "2.0.0"]);
    }

    #[rstest]
    #[case(&["1.2.3", "2.0.0-rc.1", "1.9.0"], Some("2.0.0-rc.1"), Some("1.9.0"))]
    #[case(&["1.0.0-alpha", "1.0.0-beta"], Some("1.0.0-beta"), None)] // no stable release
    #[case(&["1.0.0+first", "1.0.0+second"], Some("1.0.0+second"), Some("1.0.0+second"))] // last of equals
    #[case(&[], None, None)]
    fn test_latest(
        #[case] inputs: &[&str],
        #[case] expected_latest: Option<&str>,
        #[case] expected_stable: Option<&str>,
    ) {
        let versions = parse_all(inputs).unwrap();

        assert_eq!(
            latest(&versions).map(|v| v.to_string()).as_deref(),
            expected_latest
        );
        assert_eq!(
            latest_stable(&versions).map(|v| v.to_string()).as_deref(),
            expected_stable
        );
    }
}
