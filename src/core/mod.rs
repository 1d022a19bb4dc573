//! Core pipeline: path filtering, tree rendering, collection, report output.

pub mod collect;
pub mod filter;
pub mod paths;
pub mod reader;
pub mod report;
pub mod tree;
