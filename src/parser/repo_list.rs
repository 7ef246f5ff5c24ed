//! Repository list file parser
//!
//! One record per line, repository and minimum version separated by a comma:
//!
//! ```text
//! kubernetes/kubernetes,1.8.0
//! prometheus/prometheus,2.2.1
//! ```

use tracing::warn;

use crate::parser::types::{RepoQuery, Repository};
use crate::version::semver::parse_release_tag;

/// Parses the repository list format into queries, in file order.
///
/// Empty lines, `#` comment lines, and lines without a `/` are ignored.
/// Records that do not parse (missing comma, blank owner or name, malformed
/// minimum version) are skipped with a warning; a bad line never stops the
/// rest of the list. Minimum versions accept the same `v` prefix and
/// partial-version forms as release tags.
pub fn parse_repo_list(content: &str) -> Vec<RepoQuery> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<RepoQuery> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || !line.contains('/') {
        return None;
    }

    let Some((repository, min_version)) = line.split_once(',') else {
        warn!("Skipping repository list line without a minimum version: {}", line);
        return None;
    };

    let Some(repository) = parse_repository(repository.trim()) else {
        warn!("Skipping repository list line with a malformed repository: {}", line);
        return None;
    };

    let Some(min_version) = parse_release_tag(min_version) else {
        warn!("Skipping repository list line with a malformed minimum version: {}", line);
        return None;
    };

    Some(RepoQuery {
        repository,
        min_version,
    })
}

fn parse_repository(raw: &str) -> Option<Repository> {
    let (owner, name) = raw.split_once('/')?;
    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some(Repository::new(owner, name))
}
