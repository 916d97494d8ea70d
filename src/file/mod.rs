//! File I/O operations for settings documents.
//!
//! This module provides functionality to load JSON settings files from disk
//! and save node trees back to files with atomic write operations and
//! optional backups.

pub mod loader;
pub mod saver;
