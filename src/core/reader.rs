//! Decode strategies for reading source files as text.
//!
//! The report is always UTF-8; the decode mode only controls how strictly
//! source bytes are interpreted on the way in.

use std::fs;
use std::io;
use std::path::Path;

/// How file bytes are decoded into report text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Strict UTF-8; invalid bytes are a per-file error.
    #[default]
    Utf8,
    /// Lossy UTF-8; invalid bytes become U+FFFD.
    Utf8Lossy,
}

impl std::str::FromStr for DecodeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(DecodeMode::Utf8),
            "utf-8-lossy" | "utf8-lossy" | "lossy" => Ok(DecodeMode::Utf8Lossy),
            _ => Err(format!(
                "unsupported encoding '{}' (supported: utf-8, utf-8-lossy)",
                s
            )),
        }
    }
}

impl DecodeMode {
    /// Read a file's full contents under this decode mode.
    pub fn read_to_string(self, path: &Path) -> io::Result<String> {
        match self {
            DecodeMode::Utf8 => fs::read_to_string(path),
            DecodeMode::Utf8Lossy => {
                let bytes = fs::read(path)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}
