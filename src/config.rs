//! Directory layout for a run.
//!
//! All paths hang off a single root:
//!
//! ```text
//! <root>/input/                 files waiting to be sorted
//! <root>/organized/<category>/  destination tree, folders created on demand
//! <root>/reports/report.json    summary of the last run
//! ```

use crate::file_category::Category;
use crate::file_organizer::{OrganizeResult, ensure_dir};
use std::path::{Path, PathBuf};

/// File name of the report inside the reports directory.
pub const REPORT_FILE_NAME: &str = "report.json";

/// The three base directories a run works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganizerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub reports_dir: PathBuf,
}

impl OrganizerConfig {
    /// Builds the fixed layout under `root`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyup::config::OrganizerConfig;
    /// use std::path::Path;
    ///
    /// let config = OrganizerConfig::from_root(Path::new("/data"));
    /// assert_eq!(config.input_dir, Path::new("/data/input"));
    /// assert_eq!(config.report_path(), Path::new("/data/reports/report.json"));
    /// ```
    pub fn from_root(root: &Path) -> Self {
        Self {
            input_dir: root.join("input"),
            output_dir: root.join("organized"),
            reports_dir: root.join("reports"),
        }
    }

    /// Creates the input, output and reports directories if they are missing.
    pub fn ensure_dirs(&self) -> OrganizeResult<()> {
        ensure_dir(&self.input_dir)?;
        ensure_dir(&self.output_dir)?;
        ensure_dir(&self.reports_dir)
    }

    /// Destination folder for a category.
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.output_dir.join(category.dir_name())
    }

    /// Where the run report is written.
    pub fn report_path(&self) -> PathBuf {
        self.reports_dir.join(REPORT_FILE_NAME)
    }
}
