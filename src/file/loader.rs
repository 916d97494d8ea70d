//! Settings file loading.
//!
//! Reading and parsing are separate steps so that callers can tell a file
//! that could not be read apart from one that was read but is not JSON.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a settings file into a string.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read, or is not
/// valid UTF-8.
pub fn read_settings_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
