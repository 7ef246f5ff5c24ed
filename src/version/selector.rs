//! Latest-per-minor-branch release selection

use semver::Version;

/// The (major, minor) pair identifying a minor-version branch.
///
/// Two versions belong to the same branch iff their keys are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinorBranch {
    pub major: u64,
    pub minor: u64,
}

impl MinorBranch {
    pub fn of(version: &Version) -> Self {
        Self {
            major: version.major,
            minor: version.minor,
        }
    }
}

/// Returns the newest release on each minor-version branch that is strictly
/// newer than `min_version`, in descending version order.
///
/// The first element (if any) is the newest eligible release overall; each
/// later element is the newest release of a strictly lower minor branch
/// within the same major family. The scan stops at the floor, and also as
/// soon as it would cross into a lower major version: branches outside the
/// highest major family are never reported, even when they exceed the floor.
///
/// Duplicate versions collapse to one entry per branch; exact ties keep the
/// first occurrence in the input, so the result is deterministic for a fixed
/// input order.
pub fn latest_versions(mut releases: Vec<Version>, min_version: &Version) -> Vec<Version> {
    releases.sort_by(|a, b| b.cmp(a));

    let mut selected = Vec::new();
    let mut current_branch: Option<MinorBranch> = None;

    for version in releases {
        if version <= *min_version {
            break;
        }
        let branch = MinorBranch::of(&version);
        match current_branch {
            None => {
                current_branch = Some(branch);
                selected.push(version);
            }
            Some(current) if branch.major != current.major => break,
            Some(current) if branch.minor < current.minor => {
                current_branch = Some(branch);
                selected.push(version);
            }
            // Same branch as the pointer: the entry emitted earlier is
            // already that branch's newest release.
            Some(_) => {}
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn version(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn versions(specs: &[&str]) -> Vec<Version> {
        specs.iter().map(|s| version(s)).collect()
    }

    #[rstest]
    #[case(&[], "1.0.0", &[])]
    #[case(&["0.9.0"], "1.0.0", &[])]
    #[case(&["1.0.1"], "1.0.0", &["1.0.1"])]
    #[case(&["1.2.3", "1.3.0", "1.3.1", "2.0.0"], "1.0.0", &["2.0.0"])]
    #[case(&["1.2.3", "1.3.0", "1.3.1"], "1.0.0", &["1.3.1", "1.2.3"])]
    #[case(&["1.2.3", "1.2.5"], "1.2.4", &["1.2.5"])]
    #[case(&["1.3.1", "1.3.0", "1.2.9"], "1.0.0", &["1.3.1", "1.2.9"])]
    #[case(&["1.0.0", "1.0.1"], "1.0.1", &[])]
    #[case(&["2.2.1", "2.2.0", "2.1.3", "2.0.5", "1.9.9"], "2.0.0", &["2.2.1", "2.1.3", "2.0.5"])]
    fn latest_versions_selects_newest_per_minor_branch(
        #[case] releases: &[&str],
        #[case] floor: &str,
        #[case] expected: &[&str],
    ) {
        let result = latest_versions(versions(releases), &version(floor));
        assert_eq!(result, versions(expected));
    }

    #[test]
    fn latest_versions_accepts_unordered_input() {
        let releases = versions(&["1.2.9", "1.3.0", "1.2.3", "1.3.1"]);

        let result = latest_versions(releases, &version("1.0.0"));

        assert_eq!(result, versions(&["1.3.1", "1.2.9"]));
    }

    #[test]
    fn latest_versions_ignores_lower_major_branches_above_the_floor() {
        // 1.9.0 exceeds the floor and occupies an unseen branch, but the
        // scan stops once it crosses below the highest major family.
        let releases = versions(&["2.1.0", "2.0.3", "1.9.0"]);

        let result = latest_versions(releases, &version("0.1.0"));

        assert_eq!(result, versions(&["2.1.0", "2.0.3"]));
    }

    #[test]
    fn latest_versions_excludes_the_floor_itself() {
        let releases = versions(&["1.2.3"]);

        let result = latest_versions(releases, &version("1.2.3"));

        assert!(result.is_empty());
    }

    #[test]
    fn latest_versions_collapses_duplicate_versions() {
        let releases = versions(&["1.2.3", "1.2.3", "1.2.3"]);

        let result = latest_versions(releases, &version("1.0.0"));

        assert_eq!(result, versions(&["1.2.3"]));
    }

    #[test]
    fn latest_versions_orders_prereleases_below_their_release() {
        let releases = versions(&["1.3.1-rc.1", "1.3.1", "1.2.9"]);

        let result = latest_versions(releases, &version("1.0.0"));

        assert_eq!(result, versions(&["1.3.1", "1.2.9"]));
    }

    #[test]
    fn latest_versions_reports_a_prerelease_when_it_tops_its_branch() {
        let releases = versions(&["1.3.1-rc.1", "1.3.0", "1.2.9"]);

        let result = latest_versions(releases, &version("1.0.0"));

        assert_eq!(result, versions(&["1.3.1-rc.1", "1.2.9"]));
    }

    #[test]
    fn latest_versions_result_is_descending_unique_per_branch_and_above_floor() {
        let floor = version("1.1.0");
        let releases = versions(&[
            "1.4.2", "1.4.0", "1.3.9", "1.3.10", "1.2.0", "1.2.1", "1.1.5", "1.1.0", "1.0.9",
        ]);

        let result = latest_versions(releases, &floor);

        assert!(result.iter().all(|v| *v > floor));
        assert!(result.windows(2).all(|pair| pair[0] > pair[1]));
        let branches: Vec<MinorBranch> = result.iter().map(MinorBranch::of).collect();
        let mut deduped = branches.clone();
        deduped.dedup();
        assert_eq!(branches, deduped);
        assert_eq!(result, versions(&["1.4.2", "1.3.10", "1.2.1", "1.1.5"]));
    }
}
