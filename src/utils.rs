/*!
 * Utility functions for FileMerge
 */

use std::path::{Path, PathBuf};

/// Resolve a path against a base directory if it is not already absolute
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Normalize path separators to forward slashes
pub fn to_posix(path: &str) -> String {
    path.replace('\\', "/")
}

/// Path relative to `base` in POSIX form. Empty when the paths are equal,
/// the full path when no relative form exists.
pub fn relative_posix(path: &Path, base: &Path) -> String {
    match pathdiff::diff_paths(path, base) {
        Some(rel) => to_posix(&rel.to_string_lossy()),
        None => to_posix(&path.to_string_lossy()),
    }
}

/// Relative path used in section headers and the tree: the path relative
/// to the working directory, falling back to the basename when the
/// relative form is empty.
pub fn display_path(path: &Path, working_dir: &Path) -> String {
    let rel = relative_posix(path, working_dir);
    if !rel.is_empty() {
        return rel;
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| to_posix(&path.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolutize() {
        let base = Path::new("/work");
        assert_eq!(absolutize(Path::new("a/b"), base), PathBuf::from("/work/a/b"));
        assert_eq!(absolutize(Path::new("/etc/x"), base), PathBuf::from("/etc/x"));
    }

    #[test]
    fn test_display_path_relative() {
        let dir = Path::new("/work/proj");
        assert_eq!(
            display_path(Path::new("/work/proj/src/main.rs"), dir),
            "src/main.rs"
        );
        assert_eq!(
            display_path(Path::new("/work/other/x.txt"), dir),
            "../other/x.txt"
        );
    }

    #[test]
    fn test_display_path_falls_back_to_basename() {
        let dir = Path::new("/work/proj");
        assert_eq!(display_path(Path::new("/work/proj"), dir), "proj");
    }
}
