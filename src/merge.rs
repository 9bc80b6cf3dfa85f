/*!
 * Merge pipeline: collect, transform, and append file sections
 */

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use indicatif::ProgressBar;
use log::warn;
use rayon::prelude::*;

use crate::comments::strip_comments;
use crate::config::Config;
use crate::detect::is_probably_binary;
use crate::ensure;
use crate::error::{MergeError, Result};
use crate::exclude::Excluder;
use crate::report::FileReportInfo;
use crate::tree::render_tree;
use crate::utils::display_path;
use crate::walker::walk_root;

/// Placeholder emitted in place of binary file content
pub const BINARY_PLACEHOLDER: &str = "[binary file - content omitted]";

/// Statistics collected during a merge run
#[derive(Debug, Clone, Default)]
pub struct MergeStatistics {
    /// Number of file sections written
    pub files_merged: usize,
    /// Number of files replaced by the binary placeholder
    pub binary_files: usize,
    /// Number of files whose content was replaced by an error annotation
    pub read_errors: usize,
    /// Number of include paths that could not be read
    pub skipped_includes: usize,
    /// Total number of lines written across all sections
    pub total_lines: usize,
    /// Total number of characters written across all sections
    pub total_chars: usize,
    /// Details for each file, keyed by its relative display path
    pub file_details: HashMap<String, FileReportInfo>,
}

/// Merge engine
pub struct Merger {
    /// Merge configuration
    config: Config,
    /// Exclusion rules, built once
    excluder: Excluder,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Run statistics
    statistics: Arc<Mutex<MergeStatistics>>,
}

impl Merger {
    /// Create a new merger
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Result<Self> {
        let excluder = Excluder::new(&config)?;
        Ok(Self {
            config,
            excluder,
            progress,
            statistics: Arc::new(Mutex::new(MergeStatistics::default())),
        })
    }

    /// Get merge statistics
    pub fn get_statistics(&self) -> MergeStatistics {
        self.statistics.lock().unwrap().clone()
    }

    /// Run the merge and write the output file
    pub fn run(&self) -> Result<()> {
        let files = self.collect_files()?;
        self.progress.set_length(files.len() as u64);

        let document = self.build_document(&files);
        self.write_output(&document)
    }

    /// Resolve include roots and collect the sorted, deduplicated file list.
    ///
    /// Include paths that cannot be read are skipped with a logged warning;
    /// the run only fails when nothing at all resolves.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let mut resolved = 0usize;

        for include in &self.config.include_paths {
            match fs::metadata(include) {
                Ok(meta) if meta.is_dir() => {
                    resolved += 1;
                    files.extend(walk_root(
                        include,
                        &self.excluder,
                        self.config.respect_gitignore,
                    ));
                }
                Ok(meta) if meta.is_file() => {
                    resolved += 1;
                    if !self.excluder.is_excluded(include) {
                        files.push(include.clone());
                    }
                }
                Ok(_) => {
                    warn!(
                        "Skipping include path {}: not a file or directory",
                        include.display()
                    );
                    self.statistics.lock().unwrap().skipped_includes += 1;
                }
                Err(e) => {
                    warn!("Skipping include path {}: {}", include.display(), e);
                    self.statistics.lock().unwrap().skipped_includes += 1;
                }
            }
        }

        ensure!(
            resolved > 0,
            Config,
            "None of the {} include paths could be read",
            self.config.include_paths.len()
        );

        // overlapping include roots may discover the same file twice
        files.sort();
        files.dedup();
        Ok(files)
    }

    /// Assemble the merged document in sorted file order.
    ///
    /// Sections are rendered in parallel but collected back into list
    /// order, so the document bytes never depend on read timing.
    pub fn build_document(&self, files: &[PathBuf]) -> String {
        let mut output = String::new();

        if self.config.create_tree {
            output.push_str(&render_tree(files, &self.config.working_dir));
            output.push_str("\n\n");
        }

        let sections: Vec<String> = files
            .par_iter()
            .map(|file| self.render_section(file))
            .collect();

        for section in &sections {
            output.push_str(section);
        }

        output
    }

    /// Render one file section: header plus content, placeholder, or
    /// inline error annotation
    fn render_section(&self, file: &Path) -> String {
        let rel = display_path(file, &self.config.working_dir);
        self.progress.set_message(rel.clone());

        let body = if is_probably_binary(file) {
            let mut stats = self.statistics.lock().unwrap();
            stats.files_merged += 1;
            stats.binary_files += 1;
            stats
                .file_details
                .insert(rel.clone(), FileReportInfo { lines: 0, chars: 0 });

            BINARY_PLACEHOLDER.to_string()
        } else {
            match fs::read_to_string(file) {
                Ok(content) => {
                    let content = if self.config.filter_comments {
                        strip_comments(&content, self.config.comment_mode)
                    } else {
                        content
                    };

                    let lines = content.lines().count();
                    let chars = content.chars().count();
                    let mut stats = self.statistics.lock().unwrap();
                    stats.files_merged += 1;
                    stats.total_lines += lines;
                    stats.total_chars += chars;
                    stats
                        .file_details
                        .insert(rel.clone(), FileReportInfo { lines, chars });

                    content
                }
                Err(e) => {
                    warn!("Error reading {}: {}", file.display(), e);
                    let mut stats = self.statistics.lock().unwrap();
                    stats.files_merged += 1;
                    stats.read_errors += 1;
                    stats
                        .file_details
                        .insert(rel.clone(), FileReportInfo { lines: 0, chars: 0 });

                    format!("[error reading {}: {}]", rel, e)
                }
            }
        };

        self.progress.inc(1);
        format!("\n===== {} =====\n{}\n", rel, body)
    }

    /// Write the document to the configured output file, creating parent
    /// directories as needed
    fn write_output(&self, document: &str) -> Result<()> {
        let path = &self.config.output_file;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| MergeError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, document).map_err(|source| MergeError::Write {
            path: path.clone(),
            source,
        })
    }
}
