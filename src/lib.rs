//! tidyup - sort a downloads-style folder by file category
//!
//! This library classifies files by extension and filename keywords, moves them
//! into category subdirectories without overwriting anything, and records every
//! move in a JSON report.

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod report;

pub use config::OrganizerConfig;
pub use file_category::{Category, Classifier, ExtensionTable, KeywordTable};
pub use file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
pub use report::{MoveRecord, Report, build_report, write_report};

pub use cli::{Cli, RunOutcome, organize, run_cli};
