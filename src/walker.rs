/*!
 * Recursive file discovery under include roots
 */

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use log::warn;
use walkdir::WalkDir;

use crate::exclude::Excluder;

/// Collect all regular files under `root`, pruning excluded directories
/// at every level.
///
/// An excluded include root contributes nothing. Listing errors are
/// logged and skipped so one unreadable subtree never aborts the run.
/// Symbolic links are not followed. The returned order is unspecified;
/// the engine applies the global sort.
pub fn walk_root(root: &Path, excluder: &Excluder, respect_gitignore: bool) -> Vec<PathBuf> {
    if excluder.is_excluded(root) {
        return Vec::new();
    }

    if respect_gitignore {
        walk_with_gitignore(root, excluder)
    } else {
        walk_plain(root, excluder)
    }
}

fn walk_plain(root: &Path, excluder: &Excluder) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !excluder.is_excluded(entry.path()));

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => warn!("Error listing under {}: {}", root.display(), e),
        }
    }

    files
}

fn walk_with_gitignore(root: &Path, excluder: &Excluder) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let filter = excluder.clone();

    let walker = WalkBuilder::new(root)
        .hidden(false)
        .require_git(false)
        .follow_links(false)
        .filter_entry(move |entry| !is_git_dir(entry.path()) && !filter.is_excluded(entry.path()))
        .build();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().map_or(false, |ft| ft.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!("Error listing under {}: {}", root.display(), e),
        }
    }

    files
}

fn is_git_dir(path: &Path) -> bool {
    path.file_name().map_or(false, |name| name == ".git")
}
