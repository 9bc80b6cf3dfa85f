/*!
 * Directory tree rendering for the merged document
 *
 * Pure functions over the already-decided file list; no filesystem
 * access happens here.
 */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::utils::display_path;

/// Title line of the tree section
pub const TREE_TITLE: &str = "# TREE";

/// A node in the tree: a file leaf or a directory mapping segment names
/// to children. BTreeMap keeps children in lexicographic order.
#[derive(Debug)]
enum TreeNode {
    Leaf,
    Branch(BTreeMap<String, TreeNode>),
}

fn insert(children: &mut BTreeMap<String, TreeNode>, segments: &[&str]) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };

    let child = children.entry((*first).to_string()).or_insert_with(|| {
        if rest.is_empty() {
            TreeNode::Leaf
        } else {
            TreeNode::Branch(BTreeMap::new())
        }
    });

    if let TreeNode::Branch(grandchildren) = child {
        insert(grandchildren, rest);
    }
}

fn render(children: &BTreeMap<String, TreeNode>, prefix: &str, out: &mut String) {
    let last = children.len().saturating_sub(1);
    for (i, (name, node)) in children.iter().enumerate() {
        let is_last = i == last;
        out.push('\n');
        out.push_str(prefix);
        out.push_str(if is_last { "└─ " } else { "├─ " });
        out.push_str(name);

        if let TreeNode::Branch(grandchildren) = node {
            let next_prefix = format!("{}{}", prefix, if is_last { "   " } else { "│  " });
            render(grandchildren, &next_prefix, out);
        }
    }
}

/// Render the merged file list as an indented tree under a fixed title.
///
/// Each file contributes its working-directory-relative path, split on
/// `/`; children at every level are sorted by segment name.
pub fn render_tree(files: &[PathBuf], working_dir: &Path) -> String {
    let mut root = BTreeMap::new();
    for file in files {
        let rel = display_path(file, working_dir);
        let segments: Vec<&str> = rel.split('/').filter(|s| !s.is_empty()).collect();
        insert(&mut root, &segments);
    }

    let mut out = String::from(TREE_TITLE);
    render(&root, "", &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(dir: &str, rels: &[&str]) -> Vec<PathBuf> {
        rels.iter().map(|r| Path::new(dir).join(r)).collect()
    }

    #[test]
    fn test_render_single_level() {
        let files = paths("/proj", &["b.txt", "a.txt"]);
        assert_eq!(
            render_tree(&files, Path::new("/proj")),
            "# TREE\n├─ a.txt\n└─ b.txt"
        );
    }

    #[test]
    fn test_render_nested_directories() {
        let files = paths("/proj", &["a.txt", "sub/c.txt", "sub/inner/d.txt", "z.txt"]);
        let expected = "\
# TREE
├─ a.txt
├─ sub
│  ├─ c.txt
│  └─ inner
│     └─ d.txt
└─ z.txt";
        assert_eq!(render_tree(&files, Path::new("/proj")), expected);
    }

    #[test]
    fn test_last_child_closes_the_branch() {
        let files = paths("/proj", &["sub/x.txt", "sub/y.txt"]);
        assert_eq!(
            render_tree(&files, Path::new("/proj")),
            "# TREE\n└─ sub\n   ├─ x.txt\n   └─ y.txt"
        );
    }

    #[test]
    fn test_empty_list_renders_title_only() {
        assert_eq!(render_tree(&[], Path::new("/proj")), "# TREE");
    }

    #[test]
    fn test_segments_are_sorted_per_level() {
        let files = paths("/proj", &["b/z.txt", "a/y.txt", "b/a.txt"]);
        let expected = "\
# TREE
├─ a
│  └─ y.txt
└─ b
   ├─ a.txt
   └─ z.txt";
        assert_eq!(render_tree(&files, Path::new("/proj")), expected);
    }
}
