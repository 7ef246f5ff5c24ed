//! GitHub Releases API release source implementation

use serde::Deserialize;
use tracing::warn;

use crate::config::{self, MAX_RELEASE_PAGES, RELEASE_PAGE_SIZE};
use crate::parser::types::Repository;
use crate::version::error::SourceError;
use crate::version::source::ReleaseSource;

/// Default base URL for GitHub API
const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Response from GitHub Releases API
#[derive(Debug, Deserialize)]
struct Release {
    tag_name: String,
}

/// Release source implementation for the GitHub Releases API
pub struct GitHubReleases {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GitHubReleases {
    /// Creates a new GitHubReleases with a custom base URL and anonymous access
    pub fn new(base_url: &str) -> Self {
        Self::with_token(base_url, None)
    }

    /// Creates a new GitHubReleases with a custom base URL and an optional
    /// bearer token
    pub fn with_token(base_url: &str, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("release-scout")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            token,
        }
    }
}

impl Default for GitHubReleases {
    fn default() -> Self {
        Self::with_token(DEFAULT_BASE_URL, config::github_token())
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GitHubReleases {
    async fn list_release_tags(
        &self,
        repository: &Repository,
    ) -> Result<Vec<String>, SourceError> {
        let url = format!(
            "{}/repos/{}/{}/releases",
            self.base_url, repository.owner, repository.name
        );

        let mut tags = Vec::new();

        for page in 1..=MAX_RELEASE_PAGES {
            let mut request = self
                .client
                .get(&url)
                .header("Accept", "application/vnd.github+json")
                .query(&[("per_page", RELEASE_PAGE_SIZE), ("page", page)]);
            if let Some(token) = &self.token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(SourceError::NotFound(repository.to_string()));
            }

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok());
                return Err(SourceError::RateLimited {
                    retry_after_secs: retry_after,
                });
            }

            // GitHub reports quota exhaustion as 403 with a zeroed
            // x-ratelimit-remaining header rather than 429.
            if status == reqwest::StatusCode::FORBIDDEN && rate_limit_exhausted(&response) {
                return Err(SourceError::RateLimited {
                    retry_after_secs: None,
                });
            }

            if !status.is_success() {
                warn!("GitHub API returned status {}: {}", status, url);
                return Err(SourceError::InvalidResponse(format!(
                    "Unexpected status: {}",
                    status
                )));
            }

            let releases: Vec<Release> = response.json().await.map_err(|e| {
                warn!("Failed to parse GitHub releases response: {}", e);
                SourceError::InvalidResponse(e.to_string())
            })?;

            let page_len = releases.len();
            tags.extend(releases.into_iter().map(|release| release.tag_name));

            // A short page means there is nothing further to fetch.
            if page_len < RELEASE_PAGE_SIZE as usize {
                break;
            }
        }

        Ok(tags)
    }
}

fn rate_limit_exhausted(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get("x-ratelimit-remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|remaining| remaining == "0")
}
