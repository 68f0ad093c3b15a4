//! Output formatting and styling module.
//!
//! Provides a centralized interface for console output: styled messages, the
//! per-file progress bar and the closing summary table.

use crate::file_category::Category;
use crate::report::MoveRecord;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints the startup banner.
    ///
    /// # Arguments
    ///
    /// * `title` - The program title, framed by `===`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidyup::output::OutputFormatter;
    /// OutputFormatter::banner("File Organizer (offline)");
    /// ```
    pub fn banner(title: &str) {
        println!("{}", format!("=== {} ===", title).bold());
    }

    /// Prints a success message in green with a checkmark.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidyup::output::OutputFormatter;
    /// OutputFormatter::success("Files organized!");
    /// ```
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Prints an error message in red with an X mark.
    ///
    /// Goes to stderr, unlike the other messages.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidyup::output::OutputFormatter;
    /// OutputFormatter::error("Error: input/ is not readable");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints an info message in cyan.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to display
    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    /// Prints a regular message without styling.
    pub fn plain(message: &str) {
        println!("{}", message);
    }

    /// Prints a section header.
    ///
    /// # Arguments
    ///
    /// * `header` - The header text
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Formats the per-file progress line.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Leaf name of the moved file
    /// * `category` - The category it was sorted into
    ///
    /// # Example
    ///
    /// ```
    /// use tidyup::file_category::Category;
    /// use tidyup::output::OutputFormatter;
    ///
    /// assert_eq!(
    ///     OutputFormatter::move_line("boleto.pdf", Category::Docs),
    ///     " boleto.pdf  »»  docs/"
    /// );
    /// ```
    pub fn move_line(file_name: &str, category: Category) -> String {
        format!(" {}  »»  {}/", file_name, category.dir_name())
    }

    /// Creates a progress bar for the move loop.
    ///
    /// Falls back to the default bar style if the template is rejected.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of files to move
    ///
    /// # Returns
    ///
    /// A configured `ProgressBar` ready for use.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tidyup::output::OutputFormatter;
    /// let pb = OutputFormatter::create_progress_bar(3);
    /// pb.suspend(|| OutputFormatter::plain(" a.pdf  »»  docs/"));
    /// pb.inc(1);
    /// pb.finish_and_clear();
    /// ```
    pub fn create_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░");
        pb.set_style(style);
        pb
    }

    /// Prints a summary table with move counts by category, in category order.
    ///
    /// Categories with no moves are left out.
    ///
    /// # Arguments
    ///
    /// * `moves` - The records of the finished run
    pub fn summary_table(moves: &[MoveRecord]) {
        Self::header("SUMMARY");

        let rows: Vec<(Category, usize)> = Category::ALL
            .iter()
            .map(|c| (*c, moves.iter().filter(|m| m.category == *c).count()))
            .filter(|(_, count)| *count > 0)
            .collect();

        let width = rows
            .iter()
            .map(|(c, _)| c.description().len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (category, count) in &rows {
            println!(
                "{:<width$} | {} {}",
                category.description(),
                count.to_string().green(),
                plural(*count),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            moves.len().to_string().green().bold(),
            plural(moves.len()),
            width = width
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
