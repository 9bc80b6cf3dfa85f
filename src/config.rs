/*!
 * Configuration handling for FileMerge
 */

use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::comments::CommentMode;
use crate::ensure;
use crate::error::Result;
use crate::report::ReportFormat;
use crate::utils::absolutize;

/// Command-line arguments for FileMerge
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "filemerge",
    version = env!("CARGO_PKG_VERSION"),
    about = "Merge files and directories into a single annotated text file",
    long_about = "Collects a set of files and directories, filters them through exact-path and glob exclusions, and writes one merged text document: a header per file, an optional directory tree, optional comment stripping, and placeholders for binary content."
)]
pub struct Args {
    /// Files or directories to merge
    pub include_paths: Vec<String>,

    /// Output file name
    #[clap(short, long, default_value = "merged_files.txt")]
    pub output: String,

    /// Exact file or directory to exclude together with its descendants (repeatable)
    #[clap(long = "exclude-path", value_name = "PATH")]
    pub exclude_paths: Vec<String>,

    /// Comma-separated list of glob patterns to exclude
    #[clap(long, value_delimiter = ',')]
    pub exclude_patterns: Vec<String>,

    /// Remove comment lines from merged content
    #[clap(long)]
    pub filter_comments: bool,

    /// How aggressively comments are removed
    #[clap(long, value_enum, default_value_t = CommentMode::default())]
    pub comment_mode: CommentMode,

    /// Prepend a directory tree of the merged files
    #[clap(long)]
    pub tree: bool,

    /// Respect .gitignore files during traversal
    #[clap(long)]
    pub respect_gitignore: bool,

    /// Working directory for resolving and displaying relative paths
    #[clap(long, value_name = "DIR")]
    pub working_dir: Option<String>,

    /// Number of threads to use for processing
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Format of the run summary
    #[clap(long = "report", value_enum, default_value_t = ReportFormat::default())]
    pub report_format: ReportFormat,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Include roots to merge, in the order given
    pub include_paths: Vec<PathBuf>,

    /// Exact paths excluded together with their descendants
    pub exclude_paths: Vec<PathBuf>,

    /// Glob patterns excluded during traversal
    pub exclude_patterns: Vec<String>,

    /// Whether to strip comments from merged content
    pub filter_comments: bool,

    /// Comment stripping mode
    pub comment_mode: CommentMode,

    /// Whether to prepend the directory tree section
    pub create_tree: bool,

    /// Output file path
    pub output_file: PathBuf,

    /// Root for relative-path resolution and display
    pub working_dir: PathBuf,

    /// Whether to respect .gitignore files
    pub respect_gitignore: bool,

    /// Number of threads to use for processing
    pub num_threads: usize,

    /// Format of the run summary
    pub report_format: ReportFormat,
}

impl Config {
    /// Create configuration from command-line arguments.
    ///
    /// The working directory defaults to the process current directory;
    /// include, exclude and output paths are resolved against it.
    pub fn from_args(args: Args) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let working_dir = match &args.working_dir {
            Some(dir) => absolutize(Path::new(dir), &current_dir),
            None => current_dir,
        };

        let include_paths = args
            .include_paths
            .iter()
            .map(|p| absolutize(Path::new(p), &working_dir))
            .collect();
        let exclude_paths = args
            .exclude_paths
            .iter()
            .map(|p| absolutize(Path::new(p), &working_dir))
            .collect();
        let output_file = absolutize(Path::new(&args.output), &working_dir);

        Ok(Self {
            include_paths,
            exclude_paths,
            exclude_patterns: args.exclude_patterns,
            filter_comments: args.filter_comments,
            comment_mode: args.comment_mode,
            create_tree: args.tree,
            output_file,
            working_dir,
            respect_gitignore: args.respect_gitignore,
            num_threads: args.threads.max(1),
            report_format: args.report_format,
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.include_paths.is_empty(),
            Config,
            "No include paths supplied"
        );
        ensure!(
            self.working_dir.is_absolute(),
            Config,
            "Working directory must be absolute: {}",
            self.working_dir.display()
        );
        ensure!(
            self.working_dir.is_dir(),
            Config,
            "Working directory not found: {}",
            self.working_dir.display()
        );
        ensure!(
            self.output_file.is_absolute(),
            Config,
            "Output path must be absolute: {}",
            self.output_file.display()
        );
        Ok(())
    }
}
