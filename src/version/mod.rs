//! Version layer for fetching and selecting releases
//!
//! This module provides the core functionality for fetching release tags from
//! a remote source and selecting the newest release on each minor-version
//! branch above a caller-supplied floor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Source    │────▶│   Semver    │────▶│  Selector   │
//! │  (fetch)    │     │ (normalize) │     │  (select)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   GitHub    │
//! │ (releases)  │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`source`]: Release source trait for fetching tags from remote services
//! - [`github`]: GitHub Releases API implementation of the source trait
//! - [`semver`]: Release tag parsing and normalization
//! - [`selector`]: Per-minor-branch latest version selection
//! - [`error`]: Error types for source operations

pub mod error;
pub mod github;
pub mod selector;
pub mod semver;
pub mod source;

pub use error::SourceError;
pub use github::GitHubReleases;
pub use selector::latest_versions;
pub use self::semver::{normalize_release_tags, parse_release_tag};
pub use source::ReleaseSource;
