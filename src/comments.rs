/*!
 * Comment filtering for merged file content
 */

use clap::ValueEnum;
use once_cell::sync::Lazy;
use regex::Regex;

/// `/* ... */` spans, possibly across lines
static BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[^*]*\*+(?:[^/*][^*]*\*+)*/").unwrap());

/// Trailing `// ...` comments, keeping the whitespace before them
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)(^|\s)//.*$").unwrap());

/// Whole lines that carry nothing but a `#` comment
static HASH_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*#.*$").unwrap());

/// How aggressively comments are removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommentMode {
    /// Drop whole lines whose trimmed form starts with `#` or `//` (default)
    Line,
    /// Additionally strip `/* ... */` spans and trailing `// ...` comments
    Block,
}

impl Default for CommentMode {
    fn default() -> Self {
        Self::Line
    }
}

/// Remove comments from already-decoded text.
///
/// Line mode removes only lines that consist entirely of a comment;
/// trailing comments on code lines pass through unchanged, and line
/// order is preserved. Block mode also rewrites within lines.
pub fn strip_comments(text: &str, mode: CommentMode) -> String {
    match mode {
        CommentMode::Line => text
            .split('\n')
            .filter(|line| {
                let trimmed = line.trim_start();
                !(trimmed.starts_with('#') || trimmed.starts_with("//"))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        CommentMode::Block => {
            let text = BLOCK_COMMENT.replace_all(text, "");
            let text = LINE_COMMENT.replace_all(&text, "$1");
            HASH_LINE.replace_all(&text, "").into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_mode_removes_whole_comment_lines() {
        let input = "# a\nb\n// c\nd  // inline";
        assert_eq!(strip_comments(input, CommentMode::Line), "b\nd  // inline");
    }

    #[test]
    fn test_line_mode_handles_indented_comments() {
        let input = "keep\n   # indented hash\n\t// indented slash\nalso keep";
        assert_eq!(strip_comments(input, CommentMode::Line), "keep\nalso keep");
    }

    #[test]
    fn test_line_mode_preserves_crlf_and_trailing_newline() {
        let input = "# a\r\nb\r\n";
        assert_eq!(strip_comments(input, CommentMode::Line), "b\r\n");
    }

    #[test]
    fn test_line_mode_keeps_blank_lines() {
        let input = "a\n\nb";
        assert_eq!(strip_comments(input, CommentMode::Line), "a\n\nb");
    }

    #[test]
    fn test_block_mode_strips_spans_and_suffixes() {
        let input = "before /* one */ after\nx // trailing\n# gone\ny";
        assert_eq!(
            strip_comments(input, CommentMode::Block),
            "before  after\nx \n\ny"
        );
    }

    #[test]
    fn test_block_mode_strips_multiline_spans() {
        let input = "a\n/* first\nsecond */\nb";
        assert_eq!(strip_comments(input, CommentMode::Block), "a\n\nb");
    }
}
