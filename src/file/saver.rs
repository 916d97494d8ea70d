//! Settings file saving.
//!
//! Files are written atomically: the JSON text goes to a temporary file next
//! to the target, which is then renamed over it. A failed save leaves any
//! existing file as it was.

use crate::config::Config;
use crate::document::node::Node;
use crate::document::parser::to_json_string;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Saves a node tree as JSON.
///
/// Formatting follows `config.pretty` and `config.indent_size`. Missing
/// parent directories are created. With `config.create_backup` set, an
/// existing target is first copied to `<name>.bak`.
///
/// # Examples
///
/// ```no_run
/// use settingsquill::config::Config;
/// use settingsquill::document::node::Node;
/// use settingsquill::file::saver::save_json_file;
///
/// save_json_file("settings.json", &Node::empty_object(), &Config::default()).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails, the parent directory cannot be
/// created, the backup cannot be made, or the write or rename fails.
pub fn save_json_file<P: AsRef<Path>>(path: P, root: &Node, config: &Config) -> Result<()> {
    let path = path.as_ref();

    // Serialize before touching the filesystem
    let mut json_str = to_json_string(root, config.pretty, config.indent_size)?;
    if config.pretty {
        json_str.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    if config.create_backup && path.exists() {
        create_backup(path)?;
    }

    write_file_atomic(path, json_str.as_bytes())
}

/// Copies a file to `<name>.bak` next to it.
fn create_backup(path: &Path) -> Result<()> {
    let backup_path = sibling_with_suffix(path, "bak")?;
    fs::copy(path, &backup_path).context("Failed to create backup")?;
    Ok(())
}

fn sibling_with_suffix(path: &Path, suffix: &str) -> Result<PathBuf> {
    let original_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;
    Ok(path.with_file_name(format!("{}.{}", original_name, suffix)))
}

/// Writes data to a temporary sibling file, then renames it over `path`.
fn write_file_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let temp_path = sibling_with_suffix(path, "tmp")?;

    if let Err(err) = fs::write(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).context("Failed to write temp file");
    }

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err).context("Failed to rename temp file");
    }

    Ok(())
}
