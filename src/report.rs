/*!
 * Reporting functionality for FileMerge
 *
 * Provides functionality for generating formatted reports of merge results
 * using the tabled library for clean, consistent table rendering, or JSON
 * for machine consumption.
 */

use std::collections::HashMap;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

/// Information about a file in the report
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReportInfo {
    /// Number of lines written for the file
    pub lines: usize,
    /// Number of characters written for the file
    pub chars: usize,
}

/// Summary of a merge run
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to collect, render and write
    pub duration: Duration,
    /// Number of file sections written
    pub files_merged: usize,
    /// Number of files replaced by the binary placeholder
    pub binary_files: usize,
    /// Number of files annotated with a read error
    pub read_errors: usize,
    /// Number of include paths that could not be read
    pub skipped_includes: usize,
    /// Total number of lines written
    pub total_lines: usize,
    /// Total number of characters written
    pub total_chars: usize,
    /// Details for each file
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Format of the report output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Console table output
    Table,
    /// Pretty-printed JSON
    Json,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self::Table
    }
}

/// Report generator for merge results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on merge statistics
    pub fn generate_report(&self, report: &MergeReport) -> String {
        match self.format {
            ReportFormat::Table => self.generate_console_report(report),
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e)),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &MergeReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Truncate long paths, keeping the trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        let count = path.chars().count();
        if count <= max_len {
            return path.to_string();
        }

        let tail: String = path.chars().skip(count - (max_len - 3)).collect();
        format!("...{}", tail)
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &MergeReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        rows.push(SummaryRow {
            key: "📂 Output File".to_string(),
            value: report.output_file.clone(),
        });

        rows.push(SummaryRow {
            key: "⏱️ Process Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📄 Files Merged".to_string(),
            value: self.format_number(report.files_merged),
        });

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.total_lines),
        });

        rows.push(SummaryRow {
            key: "🔤 Total Characters".to_string(),
            value: self.format_number(report.total_chars),
        });

        if report.binary_files > 0 {
            rows.push(SummaryRow {
                key: "📦 Binary Placeholders".to_string(),
                value: self.format_number(report.binary_files),
            });
        }

        if report.read_errors > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Read Errors".to_string(),
                value: self.format_number(report.read_errors),
            });
        }

        if report.skipped_includes > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Skipped Includes".to_string(),
                value: self.format_number(report.skipped_includes),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a files table using the tabled crate
    fn create_files_table(&self, report: &MergeReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Chars")]
            chars: String,
        }

        // Sort files by character count
        let mut files: Vec<_> = report.file_details.iter().collect();
        files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));

        // Show all files or just the top 10
        let files_to_show = if report.file_details.len() > 15 {
            &files[0..10]
        } else {
            &files[..]
        };

        let rows: Vec<FileRow> = files_to_show
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                chars: self.format_number(info.chars),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &MergeReport) -> String {
        let summary_table = self.create_summary_table(report);
        let files_table = self.create_files_table(report);

        let summary_title = "✅  MERGE COMPLETE";
        let files_title = if report.file_details.len() > 15 {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  MERGED FILES"
        };

        format!(
            "{}\n{}\n\n{}\n{}",
            files_title, files_table, summary_title, summary_table
        )
    }
}
