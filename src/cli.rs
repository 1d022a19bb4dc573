//! CLI module - Command-line interface definitions and handlers

use anyhow::{bail, Result};
use clap::Parser;
use log::{info, warn};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::core::collect::collect;
use crate::core::filter::ignore_set;
use crate::core::reader::DecodeMode;
use crate::core::report::{default_output_name, write_report};
use crate::core::tree::render_tree;

/// packtxt - export matching files under a directory into a single report.
#[derive(Parser, Debug)]
#[command(name = "packtxt")]
#[command(
    author,
    version,
    about,
    long_about = r#"packtxt scans FOLDER recursively, collects every file whose name matches one
of the requested extensions, and writes the contents into a single report file
together with a tree listing of the directory structure.

Directories matching the built-in ignore set (virtualenvs, caches, VCS
metadata, build output, IDE state) are pruned from both the tree listing and
the collection; add more names with --ignore.

Examples:
    packtxt src -e rs toml
    packtxt . -e py -i fixtures -o context.txt
    packtxt docs -e md --encoding utf-8-lossy --debug
"#
)]
pub struct Cli {
    /// Root directory to scan.
    #[arg(value_name = "FOLDER")]
    pub folder_path: PathBuf,

    /// File extensions to collect (without leading dots).
    #[arg(
        short = 'e',
        long = "extensions",
        required = true,
        num_args = 1..,
        value_name = "EXT",
        long_help = "One or more file extensions to collect, without leading dots.\n\n\
Matching is case-insensitive and suffix-based: a file is collected when its\n\
lowercased name ends with '.<ext>'.\n\n\
Example: -e py rs toml"
    )]
    pub extensions: Vec<String>,

    /// Output file path.
    #[arg(
        short,
        long,
        value_name = "PATH",
        long_help = "Path of the report file to write.\n\n\
If omitted, the report is written to the current working directory as\n\
file_contents_<ext1_ext2_..>_<YYYYMMDD_HHMMSS>.txt."
    )]
    pub output: Option<PathBuf>,

    /// Additional names to ignore (unioned with the built-in set).
    #[arg(
        short,
        long = "ignore",
        num_args = 1..,
        value_name = "NAME",
        long_help = "Additional directory or segment names to skip during traversal.\n\n\
Plain names match a whole path segment exactly; names starting with '.' also\n\
match as segment suffixes (so '.git' catches both '.git' and 'my.git').\n\n\
These are unioned with the built-in ignore set."
    )]
    pub ignore: Vec<String>,

    /// Text encoding used when reading source files.
    #[arg(
        long,
        default_value = "utf-8",
        value_name = "NAME",
        long_help = "Text encoding applied when reading source files.\n\n\
Supported values:\n\
- utf-8 (default): strict; files with invalid UTF-8 get an inline ERROR entry\n\
- utf-8-lossy: invalid bytes are replaced with U+FFFD instead of failing"
    )]
    pub encoding: String,

    /// Enable per-file trace logging.
    #[arg(
        long,
        long_help = "Raise log verbosity to trace level, including one message per\n\
collected file and per ignore-filter match."
    )]
    pub debug: bool,
}

/// Initialize the logger; --debug selects trace level, otherwise info.
pub fn init_logging(debug: bool) {
    let level = if debug {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new().filter_level(level).init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if !cli.folder_path.is_dir() {
        bail!("'{}' is not a directory", cli.folder_path.display());
    }
    let root = cli.folder_path.canonicalize().unwrap_or(cli.folder_path);

    let extensions = normalize_extensions(&cli.extensions);
    if extensions.is_empty() {
        bail!("no usable extensions after normalization");
    }

    let decode: DecodeMode = cli.encoding.parse().map_err(anyhow::Error::msg)?;
    let patterns = ignore_set(&cli.ignore);

    info!(
        "scanning {} for extensions: {}",
        root.display(),
        extensions
            .iter()
            .map(|e| format!(".{e}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let (files, summary) = collect(&root, &extensions, &patterns, decode);
    let tree = render_tree(&root, &patterns);

    if files.is_empty() {
        warn!("no files matched the requested extensions");
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(default_output_name(&extensions, chrono::Local::now())));

    write_report(&output, &root, &extensions, &patterns, &tree, &files)?;

    info!(
        "wrote {}: {} files collected, {} failed, {} directories skipped",
        output.display(),
        summary.files_processed,
        summary.files_failed,
        summary.dirs_skipped
    );

    Ok(())
}

/// Lowercase, strip leading dots, drop empties.
fn normalize_extensions(raw: &[String]) -> BTreeSet<String> {
    raw.iter()
        .map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}
