//! Directory tree rendering
//!
//! Produces a box-drawing tree of the directory structure. The tree honours
//! the ignore set but not the extension filter, so it shows every surviving
//! entry regardless of type.

use log::debug;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::core::filter::should_skip;

/// Render the filtered directory tree under `root` as a newline-separated
/// string. Empty directories (after filtering) contribute no lines.
pub fn render_tree(root: &Path, patterns: &BTreeSet<String>) -> String {
    let mut lines = Vec::new();
    render_level(root, root, patterns, "", &mut lines);
    lines.join("\n")
}

fn render_level(
    dir: &Path,
    root: &Path,
    patterns: &BTreeSet<String>,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    // Sort key (is_file, name): directories first, alphabetical within groups.
    let mut children: Vec<(bool, String)> = match fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter_map(|e| {
                let name = e.file_name().to_str()?.to_string();
                let is_file = e.path().is_file();
                Some((is_file, name))
            })
            .collect(),
        Err(e) => {
            debug!("cannot list {}: {}", dir.display(), e);
            Vec::new()
        }
    };
    children.sort();
    children.retain(|(_, name)| {
        let child = dir.join(name);
        let rel = child.strip_prefix(root).unwrap_or(&child);
        !should_skip(rel, patterns)
    });

    let last = children.len().saturating_sub(1);
    for (i, (is_file, name)) in children.iter().enumerate() {
        let glyph = if i == last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{glyph}{name}"));

        if !is_file {
            let continuation = if i == last { "    " } else { "│   " };
            render_level(
                &dir.join(name),
                root,
                patterns,
                &format!("{prefix}{continuation}"),
                lines,
            );
        }
    }
}
