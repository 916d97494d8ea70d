//! Multi-group settings persistence.
//!
//! A [`SettingsManager`] keeps any number of [`NamedSettings`] groups and
//! persists them together in one JSON file, one top-level object per group:
//!
//! ```json
//! {
//!     "Window": { "Width": 1280 },
//!     "Log": { "Level": "info" }
//! }
//! ```
//!
//! Groups are written in the order they were first created or loaded, so
//! repeated saves produce the same file.
//!
//! The manager does no locking. Callers sharing it across threads must
//! serialize access themselves.

use super::named::NamedSettings;
use crate::config::Config;
use crate::document::tree::Document;
use anyhow::{bail, Result};
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SettingsManager {
    path: PathBuf,
    config: Config,
    groups: IndexMap<String, NamedSettings>,
}

impl SettingsManager {
    /// Creates a manager for the aggregate file at `path` with default options.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_config(path, Config::default())
    }

    pub fn with_config<P: Into<PathBuf>>(path: P, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
            groups: IndexMap::new(),
        }
    }

    /// Returns the default location of the aggregate file for `app_name`.
    ///
    /// Uses `<config dir>/<app_name>/<file_name>`.
    pub fn default_path(app_name: &str, config: &Config) -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push(app_name);
            path.push(&config.file_name);
            path
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces any group called `name` with a new empty one and returns it.
    ///
    /// Prior content of the group is discarded, not merged. A replaced group
    /// keeps its position in the saved file.
    ///
    /// ```
    /// use settingsquill::settings::manager::SettingsManager;
    ///
    /// let mut manager = SettingsManager::new("settings.json");
    /// manager.put_settings("Window").save_int("Width", 800);
    ///
    /// let fresh = manager.put_settings("Window");
    /// assert_eq!(fresh.get_int("Width", 0), 0);
    /// ```
    pub fn put_settings(&mut self, name: &str) -> &mut NamedSettings {
        tracing::debug!(name, "creating settings group");
        match self.groups.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(NamedSettings::new(name));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(NamedSettings::new(name)),
        }
    }

    /// Returns the group called `name`, if there is one.
    pub fn get_settings(&mut self, name: &str) -> Option<&mut NamedSettings> {
        self.groups.get_mut(name)
    }

    /// Returns the group called `name` for inspection only.
    pub fn settings(&self, name: &str) -> Option<&NamedSettings> {
        self.groups.get(name)
    }

    pub fn remove_settings(&mut self, name: &str) -> Option<NamedSettings> {
        self.groups.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }

    /// Returns the group names in sorted order.
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Replaces all groups with the ones stored in the aggregate file.
    ///
    /// Every top-level object in the file becomes one group; other top-level
    /// values are ignored. Unsaved changes to current groups are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. The current
    /// groups are left untouched in that case.
    pub fn load_settings(&mut self) -> Result<()> {
        let mut aggregate = Document::new();
        aggregate.load(&self.path)?;

        self.groups = aggregate
            .get_children(true)
            .into_iter()
            .map(|(name, document)| {
                let group = NamedSettings::from_document(name.clone(), document);
                (name, group)
            })
            .collect();

        tracing::info!(
            path = %self.path.display(),
            groups = self.groups.len(),
            "loaded settings"
        );
        Ok(())
    }

    /// Writes all groups to the aggregate file.
    ///
    /// # Errors
    ///
    /// Returns an error if a group cannot be attached (an empty group name)
    /// or the file cannot be written. The file on disk is only replaced once
    /// the whole aggregate has been serialized.
    pub fn save_settings(&self) -> Result<()> {
        let mut aggregate = Document::new();

        for (name, group) in &self.groups {
            if !aggregate.add_child_document(name, group.document(), true) {
                bail!("Failed to add settings group '{}'", name);
            }
        }

        aggregate.save_with(&self.path, &self.config)?;

        tracing::info!(
            path = %self.path.display(),
            groups = self.groups.len(),
            "saved settings"
        );
        Ok(())
    }
}
