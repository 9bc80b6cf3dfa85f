//! Glob pattern compilation for exclusion matching
//!
//! Patterns are matched against whole candidate strings, case-insensitively,
//! after normalizing separators to forward slashes. `**` crosses directory
//! separators, `*` and `?` do not, and a leading or interior `**/` also
//! matches zero segments so `**/*.min.*` catches `c.min.js` at the root.

use regex::{Regex, RegexBuilder};

use crate::error::{MergeError, Result};
use crate::utils::to_posix;

/// A glob-like exclusion pattern compiled into an anchored matcher
#[derive(Debug, Clone)]
pub struct PathPattern {
    /// Pattern text as supplied by the user
    raw: String,
    /// Compiled case-insensitive regex
    regex: Regex,
}

impl PathPattern {
    /// Compile a glob pattern. Patterns that are empty after trimming are
    /// discarded and reported as `Ok(None)`.
    pub fn compile(glob: &str) -> Result<Option<Self>> {
        let raw = to_posix(glob.trim());
        if raw.is_empty() {
            return Ok(None);
        }

        let regex = RegexBuilder::new(&glob_to_regex(&raw))
            .case_insensitive(true)
            .build()
            .map_err(|source| MergeError::Pattern {
                pattern: raw.clone(),
                source,
            })?;

        Ok(Some(Self { raw, regex }))
    }

    /// Pattern text as supplied by the user
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Test a candidate path or name against the whole pattern
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(&to_posix(candidate))
    }
}

/// Translate a glob into an anchored regex
fn glob_to_regex(glob: &str) -> String {
    let chars: Vec<char> = glob.chars().collect();
    let mut re = String::with_capacity(glob.len() + 8);
    re.push('^');

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    // `**/` spans whole segments, including none
                    re.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    re.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                re.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                re.push_str("[^/]");
                i += 1;
            }
            c => {
                re.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    re.push('$');
    re
}
