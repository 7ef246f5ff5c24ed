//! Repository list layer
//! - types.rs: Common types (Repository, RepoQuery)
//! - repo_list.rs: Repository list file parser

pub mod repo_list;
pub mod types;

pub use repo_list::parse_repo_list;
pub use types::{RepoQuery, Repository};
