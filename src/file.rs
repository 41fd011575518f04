//! Output naming and file round-trips for the command line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::{DECRYPTED_SUFFIX, ENCRYPTED_EXTENSION};

/// Suggested output name for a decrypted file.
///
/// Strips a trailing `.enc` when present, otherwise appends `.decrypted`,
/// so the suggestion never collides with the input name.
#[must_use]
pub fn output_name(original: &str) -> String {
    original
        .strip_suffix(ENCRYPTED_EXTENSION)
        .filter(|stripped| !stripped.is_empty())
        .map_or_else(|| format!("{original}{DECRYPTED_SUFFIX}"), str::to_owned)
}

pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read input file: {}", path.display()))
}

pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, data).with_context(|| format!("failed to write output file: {}", path.display()))
}
