//! Rendering of repository reports for standard output

use crate::cli::runner::RepoReport;

/// Formats a report as `latest versions of owner/name: [2.0.0 1.3.1]`
///
/// Versions are space separated inside the brackets; a repository with no
/// qualifying releases renders as `[]`.
pub fn format_report(report: &RepoReport) -> String {
    let versions = report
        .versions
        .iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    format!("latest versions of {}: [{}]", report.repository, versions)
}
