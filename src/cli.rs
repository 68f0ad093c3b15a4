//! Command-line interface module for tidyup.
//!
//! This module handles the run itself:
//! - Preparing the directory layout
//! - Listing the input files
//! - Driving classify, move and record for each file
//! - Writing the report and printing progress

use crate::config::OrganizerConfig;
use crate::file_category::Classifier;
use crate::file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
use crate::output::OutputFormatter;
use crate::report::{MoveRecord, Report, build_report, write_report};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sort the files in ./input into ./organized/<category>/ and write ./reports/report.json.
#[derive(Debug, Parser)]
#[command(name = "tidyup", version, about)]
pub struct Cli {}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The input directory held no files; nothing was moved or written.
    NothingToOrganize,
    /// Every file was moved and the report was written.
    Organized { report: Report, report_path: PathBuf },
}

/// Runs the organizer with the default tables, using `root` as the layout root.
///
/// # Arguments
///
/// * `root` - Directory holding `input/`, `organized/` and `reports/`
///
/// # Examples
///
/// ```no_run
/// use tidyup::cli::run_cli;
/// use std::path::Path;
///
/// match run_cli(Path::new("/home/me/tidy")) {
///     Ok(_) => println!("Done"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(root: &Path) -> OrganizeResult<RunOutcome> {
    let config = OrganizerConfig::from_root(root);
    organize(&config, &Classifier::default())
}

/// Organizes every file in `config.input_dir`.
///
/// This function:
/// 1. Ensures the input, output and reports directories exist
/// 2. Lists regular files in the input directory, sorted by name
/// 3. Classifies each file and moves it into its category folder
/// 4. Writes the report once all files are moved
///
/// The first failing move aborts the run. Files moved before it stay where
/// they are, and no report is written.
///
/// # Arguments
///
/// * `config` - The directory layout to work in
/// * `classifier` - Tables used to pick each file's category
///
/// # Returns
///
/// [`RunOutcome::NothingToOrganize`] when the input folder holds no files,
/// otherwise [`RunOutcome::Organized`] with the written report and its path.
///
/// # Examples
///
/// ```no_run
/// use tidyup::cli::{RunOutcome, organize};
/// use tidyup::config::OrganizerConfig;
/// use tidyup::file_category::Classifier;
/// use std::path::Path;
///
/// let config = OrganizerConfig::from_root(Path::new("/home/me/tidy"));
/// match organize(&config, &Classifier::default()) {
///     Ok(RunOutcome::Organized { report, .. }) => println!("Moved {} files", report.total_moved),
///     Ok(RunOutcome::NothingToOrganize) => println!("Nothing to do"),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn organize(config: &OrganizerConfig, classifier: &Classifier) -> OrganizeResult<RunOutcome> {
    config.ensure_dirs()?;

    let files = collect_input_files(&config.input_dir)?;

    OutputFormatter::banner("File Organizer (offline)");
    OutputFormatter::plain(&format!("Input folder:  {}", config.input_dir.display()));
    OutputFormatter::plain(&format!("Output folder: {}", config.output_dir.display()));
    OutputFormatter::plain(&format!("Files found: {}\n", files.len()));

    if files.is_empty() {
        OutputFormatter::info("No files found in input/.");
        OutputFormatter::info("Put some files in the input/ folder and run again.");
        return Ok(RunOutcome::NothingToOrganize);
    }

    info!(count = files.len(), input = %config.input_dir.display(), "organizing files");

    let pb = OutputFormatter::create_progress_bar(files.len() as u64);
    let moves = files
        .iter()
        .try_fold(Vec::with_capacity(files.len()), |mut moves, path| {
            let record = organize_file(config, classifier, path)?;
            pb.suspend(|| {
                OutputFormatter::plain(&OutputFormatter::move_line(
                    &file_name_of(path),
                    record.category,
                ))
            });
            pb.inc(1);
            moves.push(record);
            Ok::<_, OrganizeError>(moves)
        });
    pb.finish_and_clear();
    let moves = moves?;

    let report = build_report(moves);
    let report_path = config.report_path();
    write_report(&report, &report_path)?;
    info!(total = report.total_moved, report = %report_path.display(), "run complete");

    OutputFormatter::plain(&format!("\nReport written to: {}", report_path.display()));
    OutputFormatter::summary_table(&report.moves);
    OutputFormatter::success("Files organized!");

    Ok(RunOutcome::Organized {
        report,
        report_path,
    })
}

/// Classifies and moves a single file, returning its record.
fn organize_file(
    config: &OrganizerConfig,
    classifier: &Classifier,
    path: &Path,
) -> OrganizeResult<MoveRecord> {
    let category = classifier.classify(&file_name_of(path));
    let moved_to = FileOrganizer::move_file(path, &config.category_dir(category))?;
    Ok(MoveRecord::new(path, category, &moved_to))
}

/// Lists the regular files directly inside `input_dir`, sorted by file name.
///
/// Subdirectories are skipped, not descended into.
fn collect_input_files(input_dir: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let read_err = |e: std::io::Error| OrganizeError::ReadDirFailed {
        path: input_dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
