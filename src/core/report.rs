//! Report assembly and output
//!
//! Renders the collected files plus tree listing into the fixed report layout
//! and writes it to disk in one pass.

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::collect::CollectedFile;

/// Default output file name: `file_contents_<ext1_ext2_..>_<YYYYMMDD_HHMMSS>.txt`.
pub fn default_output_name(extensions: &BTreeSet<String>, now: DateTime<Local>) -> String {
    let exts = extensions.iter().cloned().collect::<Vec<_>>().join("_");
    format!("file_contents_{}_{}.txt", exts, now.format("%Y%m%d_%H%M%S"))
}

/// Render the full report body.
///
/// The layout is fixed: a header block, the tree listing, then one section per
/// collected file. Separator lines are 80 characters wide. Files must already
/// be sorted by path for deterministic output.
pub fn render_report(
    root: &Path,
    extensions: &BTreeSet<String>,
    patterns: &BTreeSet<String>,
    tree: &str,
    files: &[CollectedFile],
    now: DateTime<Local>,
) -> String {
    let eq = "=".repeat(80);
    let dash = "-".repeat(80);

    let ext_list = extensions
        .iter()
        .map(|e| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ");
    let ignore_list = patterns.iter().cloned().collect::<Vec<_>>().join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "File Content Export");
    let _ = writeln!(out, "Generated on: {}", now.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Source directory: {}", root.display());
    let _ = writeln!(out, "File extensions: {}", ext_list);
    let _ = writeln!(out, "Ignored patterns: {}", ignore_list);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", tree);
    let _ = writeln!(out, "{}", eq);

    for file in files {
        let _ = writeln!(out);
        let _ = writeln!(out, "File: {}", file.path);
        let _ = writeln!(out, "{}", dash);
        let _ = writeln!(out, "{}", file.content);
        let _ = writeln!(out, "{}", eq);
    }

    out
}

/// Write the report to `out`. An unwritable output path is fatal.
pub fn write_report(
    out: &Path,
    root: &Path,
    extensions: &BTreeSet<String>,
    patterns: &BTreeSet<String>,
    tree: &str,
    files: &[CollectedFile],
) -> Result<()> {
    let body = render_report(root, extensions, patterns, tree, files, Local::now());
    fs::write(out, body).with_context(|| format!("cannot write report to '{}'", out.display()))?;
    Ok(())
}
