//! release-scout: report the newest release on each minor-version branch
//!
//! Given a list of repositories and a minimum version for each, release-scout
//! fetches the published releases and reports, per repository, the newest
//! release on every minor-version branch strictly newer than the minimum.
//!
//! # Modules
//!
//! - [`cli`]: report pipeline and output rendering
//! - [`config`]: tunable constants and environment lookups
//! - [`parser`]: repository list file parsing
//! - [`version`]: release fetching, normalization, and selection

pub mod cli;
pub mod config;
pub mod parser;
pub mod version;
