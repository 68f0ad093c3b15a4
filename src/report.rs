//! Run reports.
//!
//! Every processed file yields a [`MoveRecord`]; a finished run folds them into a
//! [`Report`] which is written as pretty-printed JSON:
//!
//! ```json
//! {
//!   "created_at": "2024-05-01T10:22:03",
//!   "total_moved": 1,
//!   "moves": [
//!     {
//!       "original": "/home/me/input/boleto.pdf",
//!       "category": "docs",
//!       "moved_to": "/home/me/organized/docs/boleto.pdf"
//!     }
//!   ]
//! }
//! ```

use crate::file_category::Category;
use crate::file_organizer::{OrganizeError, OrganizeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// ISO-8601 with second precision and no offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single file that was moved during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Absolute path of the file before the move.
    pub original: String,
    /// Category the file was assigned.
    pub category: Category,
    /// Absolute path the file ended up at, after collision renaming.
    pub moved_to: String,
}

impl MoveRecord {
    pub fn new(original: &Path, category: Category, moved_to: &Path) -> Self {
        Self {
            original: original.to_string_lossy().into_owned(),
            category,
            moved_to: moved_to.to_string_lossy().into_owned(),
        }
    }
}

/// Summary of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub created_at: String,
    pub total_moved: usize,
    pub moves: Vec<MoveRecord>,
}

impl Report {
    /// Loads a previously written report.
    pub fn load(path: &Path) -> OrganizeResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| OrganizeError::ReportReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| OrganizeError::InvalidReportFormat {
            reason: format!("JSON parse error: {}", e),
        })
    }
}

/// Stamps the current local time and counts the records.
pub fn build_report(moves: Vec<MoveRecord>) -> Report {
    Report {
        created_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        total_moved: moves.len(),
        moves,
    }
}

/// Writes `report` to `path` as UTF-8 JSON, replacing any existing file.
pub fn write_report(report: &Report, path: &Path) -> OrganizeResult<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| {
        OrganizeError::ReportWriteFailed {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("JSON serialization failed: {}", e),
            ),
        }
    })?;

    fs::write(path, json).map_err(|e| OrganizeError::ReportWriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn record(name: &str, category: Category) -> MoveRecord {
        MoveRecord::new(
            &PathBuf::from("/in").join(name),
            category,
            &PathBuf::from("/out").join(category.dir_name()).join(name),
        )
    }

    #[test]
    fn test_build_report_counts_records() {
        let report = build_report(vec![
            record("a.pdf", Category::Docs),
            record("b.png", Category::Images),
        ]);
        assert_eq!(report.total_moved, 2);
        assert_eq!(report.moves.len(), report.total_moved);
        assert_eq!(report.moves[1].moved_to, "/out/images/b.png");
    }

    #[test]
    fn test_timestamp_has_second_precision() {
        let report = build_report(Vec::new());
        assert!(NaiveDateTime::parse_from_str(&report.created_at, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(report.created_at.len(), "2024-01-01T00:00:00".len());
    }

    #[test]
    fn test_written_schema_and_field_names() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        let report = build_report(vec![record("a.mp3", Category::Audio)]);

        write_report(&report, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["total_moved"], 1);
        assert_eq!(value["moves"][0]["original"], "/in/a.mp3");
        assert_eq!(value["moves"][0]["category"], "audio");
        assert_eq!(value["moves"][0]["moved_to"], "/out/audio/a.mp3");
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_non_ascii_written_literally() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        let report = build_report(vec![record("currículo.pdf", Category::Docs)]);

        write_report(&report, &path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("currículo.pdf"));
        assert!(!raw.contains("\\u"));
    }

    #[test]
    fn test_write_overwrites_previous_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        write_report(&build_report(vec![record("a.pdf", Category::Docs)]), &path).unwrap();
        write_report(&build_report(Vec::new()), &path).unwrap();

        let loaded = Report::load(&path).unwrap();
        assert_eq!(loaded.total_moved, 0);
        assert!(loaded.moves.is_empty());
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("report.json");
        let result = write_report(&build_report(Vec::new()), &path);
        assert!(matches!(result, Err(OrganizeError::ReportWriteFailed { .. })));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Report::load(&path),
            Err(OrganizeError::InvalidReportFormat { .. })
        ));
    }
}
