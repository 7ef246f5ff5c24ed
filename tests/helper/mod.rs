//! Release source test utilities

use std::collections::HashMap;

use async_trait::async_trait;

use release_scout::parser::types::Repository;
use release_scout::version::error::SourceError;
use release_scout::version::source::ReleaseSource;

/// Release source backed by a fixed tag map
pub struct StaticReleaseSource {
    tags: HashMap<String, Vec<String>>,
}

impl StaticReleaseSource {
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
        }
    }

    pub fn with_tags(mut self, repository: &str, tags: Vec<&str>) -> Self {
        self.tags.insert(
            repository.to_string(),
            tags.into_iter().map(|t| t.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl ReleaseSource for StaticReleaseSource {
    async fn list_release_tags(
        &self,
        repository: &Repository,
    ) -> Result<Vec<String>, SourceError> {
        match self.tags.get(&repository.to_string()) {
            Some(tags) => Ok(tags.clone()),
            None => Err(SourceError::NotFound(repository.to_string())),
        }
    }
}
