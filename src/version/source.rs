//! Release source trait for fetching repository release tags

#[cfg(test)]
use mockall::automock;

use crate::parser::types::Repository;
use crate::version::error::SourceError;

/// Trait for fetching the published release tags of a repository
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Fetches all release tags for a repository
    ///
    /// # Arguments
    /// * `repository` - The repository whose releases to list
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Raw tag strings; callers must not rely on their order
    /// * `Err(SourceError)` - If the fetch fails
    async fn list_release_tags(
        &self,
        repository: &Repository,
    ) -> Result<Vec<String>, SourceError>;
}
