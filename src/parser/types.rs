//! Common types for the repository list

use semver::Version;

/// A GitHub repository identified by owner and name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repository {
    /// Account or organization owning the repository (e.g., "kubernetes")
    pub owner: String,
    /// Repository name within that namespace (e.g., "kubernetes")
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// One record of the repository list: a repository plus the exclusive
/// minimum version below which its releases are ignored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoQuery {
    pub repository: Repository,
    pub min_version: Version,
}
