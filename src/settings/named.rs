//! Named settings groups.
//!
//! [`NamedSettings`] is the unit a subsystem receives from the
//! [`SettingsManager`](super::manager::SettingsManager): a name plus a
//! [`Document`] holding that subsystem's values. Every `start_*` call must
//! be paired with its `end_*` call, even on early exits, so the next user of
//! the group finds the cursors at the root. The `with_*` helpers do the
//! pairing for you.
//!
//! # Example
//!
//! ```
//! use settingsquill::settings::named::NamedSettings;
//!
//! let mut window = NamedSettings::new("Window");
//! window.with_save_object("Size", |s| {
//!     s.save_int("Width", 1280);
//!     s.save_int("Height", 720);
//! });
//!
//! let width = window.with_load_object("Size", |s| s.get_int("Width", 0));
//! assert_eq!(width, Some(1280));
//! ```

use crate::cursor::scope::Key;
use crate::document::tree::Document;

#[derive(Debug, Clone)]
pub struct NamedSettings {
    name: String,
    document: Document,
}

impl NamedSettings {
    /// Creates a group with an empty document.
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_document(name, Document::new())
    }

    /// Wraps an existing document.
    pub fn from_document(name: impl Into<String>, document: Document) -> Self {
        Self {
            name: name.into(),
            document,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Runs `f` inside the object at `key` in the write scope.
    ///
    /// Returns `None` without calling `f` if the object cannot be entered.
    pub fn with_save_object<'k, R>(
        &mut self,
        key: impl Into<Key<'k>>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        if !self.start_save_object(key) {
            return None;
        }
        let result = f(self);
        self.end_save_object();
        Some(result)
    }

    /// Runs `f` inside a fresh array at `key` in the write scope.
    pub fn with_save_array<'k, R>(
        &mut self,
        key: impl Into<Key<'k>>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        if !self.start_save_array(key, true) {
            return None;
        }
        let result = f(self);
        self.end_save_array();
        Some(result)
    }

    /// Runs `f` inside the object at `key` in the read scope.
    pub fn with_load_object<'k, R>(
        &mut self,
        key: impl Into<Key<'k>>,
        f: impl FnOnce(&mut Self) -> R,
    ) -> Option<R> {
        if !self.start_load_object(key) {
            return None;
        }
        let result = f(self);
        self.end_load_object();
        Some(result)
    }

    /// Runs `f` with the array length inside the array at `key` in the read scope.
    ///
    /// Unlike [`NamedSettings::start_load_array`], a missing array is
    /// reported as `None` rather than as length 0.
    pub fn with_load_array<'k, R>(
        &mut self,
        key: impl Into<Key<'k>>,
        f: impl FnOnce(&mut Self, usize) -> R,
    ) -> Option<R> {
        let key: Key<'_> = key.into();
        let len = self.document.load_array_len(key)?;
        self.start_load_array(key);
        let result = f(self, len);
        self.end_load_array();
        Some(result)
    }

    pub fn start_save_object<'k>(&mut self, key: impl Into<Key<'k>>) -> bool {
        self.document.start_save_object(key)
    }

    pub fn end_save_object(&mut self) -> bool {
        self.document.end_save_object()
    }

    /// Enters the array at `key` for writing.
    ///
    /// With `overwrite` set, any existing content at `key` is discarded.
    pub fn start_save_array<'k>(&mut self, key: impl Into<Key<'k>>, overwrite: bool) -> bool {
        self.document.start_save_array(key, overwrite)
    }

    pub fn end_save_array(&mut self) -> bool {
        self.document.end_save_array()
    }

    pub fn save_bool<'k>(&mut self, key: impl Into<Key<'k>>, value: bool) -> bool {
        self.document.save_bool(key, value)
    }

    pub fn save_int<'k>(&mut self, key: impl Into<Key<'k>>, value: i32) -> bool {
        self.document.save_int(key, value)
    }

    pub fn save_uint<'k>(&mut self, key: impl Into<Key<'k>>, value: u32) -> bool {
        self.document.save_uint(key, value)
    }

    pub fn save_int64<'k>(&mut self, key: impl Into<Key<'k>>, value: i64) -> bool {
        self.document.save_int64(key, value)
    }

    pub fn save_uint64<'k>(&mut self, key: impl Into<Key<'k>>, value: u64) -> bool {
        self.document.save_uint64(key, value)
    }

    pub fn save_double<'k>(&mut self, key: impl Into<Key<'k>>, value: f64) -> bool {
        self.document.save_double(key, value)
    }

    pub fn save_string<'k>(&mut self, key: impl Into<Key<'k>>, value: &str) -> bool {
        self.document.save_string(key, value)
    }

    pub fn start_load_object<'k>(&mut self, key: impl Into<Key<'k>>) -> bool {
        self.document.start_load_object(key)
    }

    pub fn end_load_object(&mut self) -> bool {
        self.document.end_load_object()
    }

    /// Enters the array at `key` for reading and returns its length.
    ///
    /// Returns 0 both for an empty array and for a missing one.
    pub fn start_load_array<'k>(&mut self, key: impl Into<Key<'k>>) -> usize {
        self.document.start_load_array(key)
    }

    pub fn end_load_array(&mut self) -> bool {
        self.document.end_load_array()
    }

    pub fn get_bool<'k>(&self, key: impl Into<Key<'k>>, default: bool) -> bool {
        self.document.get_bool(key, default)
    }

    pub fn get_int<'k>(&self, key: impl Into<Key<'k>>, default: i32) -> i32 {
        self.document.get_int(key, default)
    }

    pub fn get_uint<'k>(&self, key: impl Into<Key<'k>>, default: u32) -> u32 {
        self.document.get_uint(key, default)
    }

    pub fn get_int64<'k>(&self, key: impl Into<Key<'k>>, default: i64) -> i64 {
        self.document.get_int64(key, default)
    }

    pub fn get_uint64<'k>(&self, key: impl Into<Key<'k>>, default: u64) -> u64 {
        self.document.get_uint64(key, default)
    }

    pub fn get_double<'k>(&self, key: impl Into<Key<'k>>, default: f64) -> f64 {
        self.document.get_double(key, default)
    }

    pub fn get_string<'k>(&self, key: impl Into<Key<'k>>, default: &str) -> String {
        self.document.get_string(key, default)
    }
}
