//! Report pipeline from repository list file to selected versions

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use futures::future::join_all;
use semver::Version;
use tokio::time::sleep;
use tracing::{error, warn};

use crate::cli::output::format_report;
use crate::config::FETCH_STAGGER_DELAY_MS;
use crate::parser::parse_repo_list;
use crate::parser::types::{RepoQuery, Repository};
use crate::version::github::GitHubReleases;
use crate::version::selector::latest_versions;
use crate::version::semver::normalize_release_tags;
use crate::version::source::ReleaseSource;

/// Selection result for a single repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReport {
    pub repository: Repository,
    pub versions: Vec<Version>,
}

/// Build the report for a single repository query
///
/// Fetches release tags from the source, normalizes them, and selects the
/// newest release per minor branch above the query's minimum version.
/// A fetch failure is logged and degrades the repository to an empty release
/// set so the remaining repositories are unaffected.
async fn report_for_query(source: &dyn ReleaseSource, query: &RepoQuery) -> RepoReport {
    let tags = match source.list_release_tags(&query.repository).await {
        Ok(tags) => tags,
        Err(e) => {
            error!("Failed to fetch releases for {}: {}", query.repository, e);
            Vec::new()
        }
    };

    let releases = normalize_release_tags(&tags);
    let versions = latest_versions(releases, &query.min_version);

    RepoReport {
        repository: query.repository.clone(),
        versions,
    }
}

/// Build reports for every query in the list
///
/// Fetches are executed in parallel with staggered start times to avoid
/// rate limiting. Reports come back in query order regardless of completion
/// order.
pub async fn collect_reports(source: &dyn ReleaseSource, queries: &[RepoQuery]) -> Vec<RepoReport> {
    let futures = queries.iter().enumerate().map(|(i, query)| {
        let delay = Duration::from_millis(FETCH_STAGGER_DELAY_MS * i as u64);
        async move {
            sleep(delay).await;
            report_for_query(source, query).await
        }
    });

    join_all(futures).await
}

/// Read a repository list file and print one report line per repository
pub async fn run(path: &Path) -> anyhow::Result<()> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read repository list {}", path.display()))?;

    let queries = parse_repo_list(&content);
    if queries.is_empty() {
        warn!("No usable repository entries in {}", path.display());
    }

    let source = GitHubReleases::default();
    for report in collect_reports(&source, &queries).await {
        println!("{}", format_report(&report));
    }

    Ok(())
}
