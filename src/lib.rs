/*!
 * FileMerge - Merge files and directories into a single annotated text file
 *
 * This library collects a user-selected set of files and directories,
 * filters them through exact-path and glob exclusions, and produces one
 * merged text document: a header per file, an optional directory tree,
 * optional comment stripping, and placeholders for binary content.
 */

pub mod comments;
pub mod config;
pub mod detect;
pub mod error;
pub mod exclude;
pub mod merge;
pub mod pattern;
pub mod report;
pub mod tree;
pub mod utils;
pub mod walker;


// Re-export main components for easier access
pub use comments::{strip_comments, CommentMode};
pub use config::{Args, Config};
pub use error::{MergeError, Result};
pub use exclude::Excluder;
pub use merge::{MergeStatistics, Merger, BINARY_PLACEHOLDER};
pub use pattern::PathPattern;
pub use report::{FileReportInfo, MergeReport, ReportFormat, Reporter};
pub use tree::render_tree;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
