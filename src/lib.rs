//! SettingsQuill - scoped JSON document cursors and multi-group settings
//! persistence.
//!
//! Subsystems write their settings through a [`NamedSettings`] group by
//! entering nested objects and arrays and storing typed values at each
//! level. A [`SettingsManager`] collects the groups and saves them to one
//! JSON file.
//!
//! # Example
//!
//! ```
//! use settingsquill::SettingsManager;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("settings.json");
//!
//! let mut manager = SettingsManager::new(&path);
//! let group = manager.put_settings("Group1");
//! group.save_int("Prop1", 11);
//! group.start_save_array("Prop4", true);
//! group.save_int(0, 22);
//! group.save_int(1, 33);
//! group.end_save_array();
//! manager.save_settings().unwrap();
//!
//! let mut loaded = SettingsManager::new(&path);
//! loaded.load_settings().unwrap();
//! let group = loaded.get_settings("Group1").unwrap();
//! assert_eq!(group.get_int("Prop1", 0), 11);
//! assert_eq!(group.start_load_array("Prop4"), 2);
//! assert_eq!(group.get_int(1, 0), 33);
//! ```

pub mod config;
pub mod cursor;
pub mod document;
pub mod file;
pub mod settings;

pub use config::Config;
pub use document::node::Node;
pub use document::tree::Document;
pub use settings::{NamedSettings, SettingsManager};
