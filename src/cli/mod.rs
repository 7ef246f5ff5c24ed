//! Command line interface layer
//!
//! # Modules
//!
//! - [`runner`]: report pipeline from repository list file to rendered lines
//! - [`output`]: rendering of reports for standard output

pub mod output;
pub mod runner;

pub use output::format_report;
pub use runner::{RepoReport, collect_reports, run};
