//! Settings groups and their persistence.
//!
//! # Modules
//!
//! - `named`: a named group wrapping one document
//! - `manager`: the collection of groups saved to one file
//!
//! # Example
//!
//! ```no_run
//! use settingsquill::settings::manager::SettingsManager;
//!
//! let mut manager = SettingsManager::new("settings.json");
//! let window = manager.put_settings("Window");
//! window.save_int("Width", 1280);
//! manager.save_settings().unwrap();
//! ```

pub mod manager;
pub mod named;

pub use manager::SettingsManager;
pub use named::NamedSettings;
