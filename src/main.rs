//! packtxt - export a directory's text files into a single annotated report
//!
//! packtxt walks a directory tree, collects every file whose name matches one
//! of the requested extensions, and writes the contents plus a tree listing of
//! the directory structure into one report file.

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.debug);
    cli::run(cli)
}
