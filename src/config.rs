use std::env;

// =============================================================================
// Release fetching constants
// =============================================================================

/// Number of releases requested per GitHub API page (the service caps this at 100)
pub const RELEASE_PAGE_SIZE: u32 = 80;

/// Upper bound on release pages fetched for a single repository
pub const MAX_RELEASE_PAGES: u32 = 10;

/// Delay between starting each fetch request to avoid rate limiting (10ms)
pub const FETCH_STAGGER_DELAY_MS: u64 = 10;

/// Environment variable holding an optional GitHub API token
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Returns the GitHub API token from the environment, if one is set.
/// Blank values count as unset, so an empty `GITHUB_TOKEN` falls back to
/// anonymous access.
pub fn github_token() -> Option<String> {
    github_token_from(env::var(GITHUB_TOKEN_ENV).ok())
}

fn github_token_from(raw: Option<String>) -> Option<String> {
    raw.map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
