//! Traversal and file collection
//!
//! Depth-first walk over the scan root. Directories flagged by the ignore
//! filter are pruned without descending; matching files are read in full,
//! with per-file read failures recorded inline so a single unreadable file
//! never aborts the run.

use log::{debug, trace, warn};
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::filter::should_skip;
use crate::core::paths::make_relative;
use crate::core::reader::DecodeMode;

/// One source file destined for the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedFile {
    /// Path relative to the scan root, '/'-separated.
    pub path: String,
    /// Decoded content, or an "ERROR: <message>" placeholder.
    pub content: String,
}

/// Counters reported once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_failed: usize,
    pub dirs_skipped: usize,
}

/// Extension matching is a case-insensitive suffix test: the lowercased file
/// name must end with ".<ext>" for some requested extension.
fn matches_extension(name: &str, extensions: &BTreeSet<String>) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Walk `root` and collect every surviving file matching the extension set.
///
/// Returns the collected files sorted by path, plus the run counters.
pub fn collect(
    root: &Path,
    extensions: &BTreeSet<String>,
    patterns: &BTreeSet<String>,
    decode: DecodeMode,
) -> (Vec<CollectedFile>, RunSummary) {
    let mut files = Vec::new();
    let mut summary = RunSummary::default();

    let mut walker = WalkDir::new(root).into_iter();
    loop {
        let entry = match walker.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(e)) => {
                debug!("walk error: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if path == root {
            continue;
        }
        let rel = match path.strip_prefix(root) {
            Ok(r) => r,
            Err(_) => continue,
        };

        if entry.file_type().is_dir() {
            if should_skip(rel, patterns) {
                summary.dirs_skipped += 1;
                walker.skip_current_dir();
            }
            continue;
        }

        if should_skip(rel, patterns) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !matches_extension(&name, extensions) {
            continue;
        }

        let rel_str = match make_relative(path, root) {
            Some(r) => r,
            None => continue,
        };
        match decode.read_to_string(path) {
            Ok(content) => {
                trace!("collected {}", rel_str);
                summary.files_processed += 1;
                files.push(CollectedFile {
                    path: rel_str,
                    content,
                });
            }
            Err(e) => {
                warn!("failed to read {}: {}", rel_str, e);
                summary.files_failed += 1;
                files.push(CollectedFile {
                    path: rel_str,
                    content: format!("ERROR: {}", e),
                });
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    (files, summary)
}
