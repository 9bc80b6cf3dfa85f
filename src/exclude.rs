/*!
 * Exclusion rules applied during traversal
 */

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::pattern::PathPattern;
use crate::utils::relative_posix;

/// Combined exclusion predicate over absolute paths.
///
/// Built once per run from the configuration and never mutated, so walker
/// filters and parallel workers can share clones freely.
#[derive(Debug, Clone)]
pub struct Excluder {
    /// Exact paths excluded together with their descendants
    exclude_paths: Vec<PathBuf>,
    /// Compiled glob patterns
    patterns: Vec<PathPattern>,
    /// Root for relative-path matching
    working_dir: PathBuf,
    /// The configured output file, never merged into itself
    output_file: PathBuf,
}

impl Excluder {
    /// Build the predicate from the run configuration
    pub fn new(config: &Config) -> Result<Self> {
        let mut patterns = Vec::new();
        for raw in &config.exclude_patterns {
            if let Some(pattern) = PathPattern::compile(raw)? {
                patterns.push(pattern);
            }
        }

        Ok(Self {
            exclude_paths: config.exclude_paths.clone(),
            patterns,
            working_dir: config.working_dir.clone(),
            output_file: config.output_file.clone(),
        })
    }

    /// Check whether a path is excluded from the merge.
    ///
    /// True when the path is the output file itself, equals or sits under
    /// one of the exact exclude paths, or matches an exclude pattern by
    /// its working-directory-relative path or its bare name.
    pub fn is_excluded(&self, path: &Path) -> bool {
        if path == self.output_file {
            return true;
        }

        // starts_with compares whole components, so excluding `foo`
        // never catches `foobar`
        if self.exclude_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }

        if self.patterns.is_empty() {
            return false;
        }

        let rel = relative_posix(path, &self.working_dir);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        self.patterns
            .iter()
            .any(|p| p.is_match(&rel) || p.is_match(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comments::CommentMode;
    use crate::report::ReportFormat;

    fn config(dir: &Path) -> Config {
        Config {
            include_paths: vec![dir.to_path_buf()],
            exclude_paths: vec![],
            exclude_patterns: vec![],
            filter_comments: false,
            comment_mode: CommentMode::Line,
            create_tree: false,
            output_file: dir.join("merged_files.txt"),
            working_dir: dir.to_path_buf(),
            respect_gitignore: false,
            num_threads: 1,
            report_format: ReportFormat::Table,
        }
    }

    #[test]
    fn test_exact_path_matches_on_component_boundaries() {
        let dir = Path::new("/work/proj");
        let mut cfg = config(dir);
        cfg.exclude_paths = vec![dir.join("foo")];
        let excluder = Excluder::new(&cfg).expect("build excluder");

        assert!(excluder.is_excluded(&dir.join("foo")));
        assert!(excluder.is_excluded(&dir.join("foo/inner.txt")));
        assert!(excluder.is_excluded(&dir.join("foo/deep/nested.txt")));
        assert!(!excluder.is_excluded(&dir.join("foobar/x.txt")));
        assert!(!excluder.is_excluded(&dir.join("fo")));
    }

    #[test]
    fn test_patterns_match_relative_path_and_basename() {
        let dir = Path::new("/work/proj");
        let mut cfg = config(dir);
        cfg.exclude_patterns = vec!["*.log".to_string(), "build/**".to_string()];
        let excluder = Excluder::new(&cfg).expect("build excluder");

        // basename match works at any depth
        assert!(excluder.is_excluded(&dir.join("deep/nested/error.log")));
        // relative-path match is rooted at the working directory
        assert!(excluder.is_excluded(&dir.join("build/out.js")));
        assert!(!excluder.is_excluded(&dir.join("src/build.rs")));
        assert!(!excluder.is_excluded(&dir.join("src/main.rs")));
    }

    #[test]
    fn test_output_file_is_always_excluded() {
        let dir = Path::new("/work/proj");
        let cfg = config(dir);
        let excluder = Excluder::new(&cfg).expect("build excluder");

        assert!(excluder.is_excluded(&dir.join("merged_files.txt")));
        assert!(!excluder.is_excluded(&dir.join("other.txt")));
    }

    #[test]
    fn test_empty_patterns_are_ignored() {
        let dir = Path::new("/work/proj");
        let mut cfg = config(dir);
        cfg.exclude_patterns = vec!["  ".to_string(), String::new()];
        let excluder = Excluder::new(&cfg).expect("build excluder");

        assert!(!excluder.is_excluded(&dir.join("anything.txt")));
    }
}
