//! Path ignore filtering
//!
//! Two matching modes: plain patterns match a whole path segment exactly;
//! patterns starting with '.' also match as suffixes of a segment, so `.git`
//! catches both `.git` and `my.git` while `git` would catch neither.

use log::trace;
use std::collections::BTreeSet;
use std::path::Path;

/// Directory names skipped by default: virtualenvs, caches, VCS metadata,
/// build output, IDE state and a few misc entries.
const DEFAULT_IGNORES: &[&str] = &[
    ".venv",
    "venv",
    "env",
    ".env",
    "virtualenv",
    "__pycache__",
    ".cache",
    ".mypy_cache",
    ".pytest_cache",
    ".tox",
    "node_modules",
    ".git",
    ".svn",
    ".hg",
    "build",
    "dist",
    "target",
    ".eggs",
    ".idea",
    ".vscode",
    ".DS_Store",
    "htmlcov",
    "coverage",
];

/// The built-in ignore set.
pub fn default_ignores() -> BTreeSet<String> {
    DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect()
}

/// Build the effective ignore set for one run: built-ins plus user names.
pub fn ignore_set(extra: &[String]) -> BTreeSet<String> {
    let mut set = default_ignores();
    set.extend(extra.iter().cloned());
    set
}

/// Check whether any segment of `path` matches the ignore set.
///
/// `path` is expected relative to the traversal root, so ancestor segments
/// are re-tested on every call; the set is small enough that this is cheap.
pub fn should_skip(path: &Path, patterns: &BTreeSet<String>) -> bool {
    for segment in path.components().filter_map(|c| c.as_os_str().to_str()) {
        for pattern in patterns {
            let hit = if pattern.starts_with('.') {
                segment.ends_with(pattern.as_str())
            } else {
                segment == pattern
            };
            if hit {
                trace!(
                    "skipping {} (segment '{}' matched '{}')",
                    path.display(),
                    segment,
                    pattern
                );
                return true;
            }
        }
    }
    false
}
