//! Global error handling for filemerge
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project. Only configuration, pattern and final
//! write failures are fatal; everything else is handled in place during a
//! run and surfaces as log lines or inline annotations in the output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for filemerge operations
#[derive(Error, Debug)]
pub enum MergeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// An exclude pattern failed to compile
    #[error("Invalid exclude pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    /// Writing the merged output failed
    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for filemerge operations
pub type Result<T> = std::result::Result<T, MergeError>;

/// Creates a MergeError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::MergeError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
