//! Settings documents.
//!
//! A [`Document`] owns a node tree, the file it was loaded from or will be
//! saved to, and one [`Writer`] and one [`Reader`] bound to its root. The
//! `save_*` methods go through the writer and the `load`/`get_*` methods
//! through the reader.
//!
//! A document whose source failed to parse keeps a sticky error flag. Its
//! root is an empty object and every read returns the caller's default.
//!
//! # Example
//!
//! ```
//! use settingsquill::document::tree::Document;
//!
//! let mut doc = Document::new();
//! assert!(doc.start_save_object("Window"));
//! assert!(doc.save_int("Width", 1280));
//! assert!(doc.end_save_object());
//!
//! assert!(doc.start_load_object("Window"));
//! assert_eq!(doc.get_int("Width", 0), 1280);
//! assert_eq!(doc.get_int("Height", 720), 720);
//! assert!(doc.end_load_object());
//! ```

use super::node::Node;
use super::parser::{parse_json, to_json_string};
use super::pointer::resolve_pointer;
use crate::config::Config;
use crate::cursor::reader::Reader;
use crate::cursor::scope::Key;
use crate::cursor::writer::Writer;
use crate::file::loader::read_settings_text;
use crate::file::saver::save_json_file;
use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Document {
    root: Node,
    path: Option<PathBuf>,
    /// Parse error of the source, if it was malformed
    error: Option<String>,
    writer: Writer,
    reader: Reader,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Creates an empty in-memory document whose root is an empty object.
    pub fn new() -> Self {
        Self::from_node(Node::empty_object())
    }

    /// Creates a document that owns `root`.
    pub fn from_node(root: Node) -> Self {
        Self {
            root,
            path: None,
            error: None,
            writer: Writer::new(),
            reader: Reader::new(),
        }
    }

    /// Parses JSON text into a document.
    ///
    /// Malformed text yields an empty document with the error flag set.
    ///
    /// ```
    /// use settingsquill::document::tree::Document;
    ///
    /// let doc = Document::parse("{ broken");
    /// assert!(doc.has_error());
    /// assert!(doc.root().is_object());
    /// ```
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::new();
        doc.replace_source(text);
        doc
    }

    /// Opens a document from a file.
    ///
    /// A file that does not exist yields an empty document bound to `path`,
    /// so that a later [`Document::save_in_place`] creates it. A file that
    /// cannot be parsed yields an empty document with the error flag set.
    /// A file that exists but cannot be read is logged and yields an empty
    /// document without the error flag.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut doc = Self::new();
        doc.path = Some(path.to_path_buf());

        if path.exists() {
            if let Err(err) = doc.load(path) {
                tracing::warn!(path = %path.display(), "{:#}", err);
            }
        }
        doc
    }

    /// Loads the document from `path`, replacing the current tree.
    ///
    /// Both cursors return to the root. When the file cannot be read the
    /// document is left unchanged. When it is read but fails to parse, the
    /// root becomes an empty object and the error flag is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = read_settings_text(path)?;

        self.path = Some(path.to_path_buf());
        self.replace_source(&text);

        match &self.error {
            Some(message) => Err(anyhow!("Failed to parse {}: {}", path.display(), message)),
            None => {
                tracing::debug!(path = %path.display(), "loaded settings document");
                Ok(())
            }
        }
    }

    fn replace_source(&mut self, text: &str) {
        match parse_json(text) {
            Ok(root) => {
                self.root = root;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!("malformed settings source: {:#}", err);
                self.root = Node::empty_object();
                self.error = Some(format!("{:#}", err));
            }
        }
        self.writer.reset();
        self.reader.reset();
    }

    /// Saves the document to `path` with default formatting options.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the write fails.
    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let config = Config {
            pretty,
            ..Config::default()
        };
        self.save_with(path, &config)
    }

    /// Saves the document to `path` using `config` for formatting and backups.
    pub fn save_with<P: AsRef<Path>>(&self, path: P, config: &Config) -> Result<()> {
        save_json_file(path, &self.root, config)
    }

    /// Saves the document back to the path it was opened or loaded from.
    pub fn save_in_place(&self, pretty: bool) -> Result<()> {
        let path = self
            .path
            .as_deref()
            .ok_or_else(|| anyhow!("Document has no file path"))?;
        self.save(path, pretty)
    }

    /// Serializes the root to JSON text.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        to_json_string(&self.root, pretty, Config::default().indent_size)
    }

    /// Returns true if the source of this document failed to parse.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.path = Some(path.into());
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// Looks up a node by rendered pointer, e.g. `/Group1/Prop4/0`.
    pub fn node_at(&self, pointer: &str) -> Option<&Node> {
        resolve_pointer(&self.root, pointer)
    }

    /// Copies the top-level members of the root into separate documents.
    ///
    /// With `only_objects` set, members that are not objects are skipped.
    /// Each returned document owns its own copy; changing it does not affect
    /// this one.
    pub fn get_children(&self, only_objects: bool) -> Vec<(String, Document)> {
        match &self.root {
            Node::Object(members) => members
                .iter()
                .filter(|(_, child)| !only_objects || child.is_object())
                .map(|(name, child)| (name.clone(), Document::from_node(child.clone())))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Inserts a copy of `child`'s root as the member `name` of this root.
    ///
    /// Fails if `name` is empty, if the root is not an object, or if the
    /// member exists and `overwrite` is false.
    pub fn add_child_document(&mut self, name: &str, child: &Document, overwrite: bool) -> bool {
        if name.is_empty() {
            tracing::debug!("refusing child document with empty name");
            return false;
        }
        let Node::Object(members) = &mut self.root else {
            tracing::debug!(name, "root is not an object, cannot add child document");
            return false;
        };
        if !overwrite && members.contains_key(name) {
            tracing::debug!(name, "child document exists and overwrite is off");
            return false;
        }

        members.insert(name.to_string(), child.root.clone());
        true
    }

    /// Returns the writer scope and the reader scope pointers.
    pub fn scopes(&self) -> (&str, &str) {
        (self.writer.scope().pointer(), self.reader.scope().pointer())
    }

    // Write side

    pub fn start_save_object<'k>(&mut self, key: impl Into<Key<'k>>) -> bool {
        self.writer.start_object(&mut self.root, key)
    }

    pub fn end_save_object(&mut self) -> bool {
        self.writer.end_object()
    }

    pub fn start_save_array<'k>(&mut self, key: impl Into<Key<'k>>, overwrite: bool) -> bool {
        self.writer.start_array(&mut self.root, key, overwrite)
    }

    pub fn end_save_array(&mut self) -> bool {
        self.writer.end_array(&self.root)
    }

    pub fn save_bool<'k>(&mut self, key: impl Into<Key<'k>>, value: bool) -> bool {
        self.writer.set_bool(&mut self.root, key, value)
    }

    pub fn save_int<'k>(&mut self, key: impl Into<Key<'k>>, value: i32) -> bool {
        self.writer.set_int(&mut self.root, key, value)
    }

    pub fn save_uint<'k>(&mut self, key: impl Into<Key<'k>>, value: u32) -> bool {
        self.writer.set_uint(&mut self.root, key, value)
    }

    pub fn save_int64<'k>(&mut self, key: impl Into<Key<'k>>, value: i64) -> bool {
        self.writer.set_int64(&mut self.root, key, value)
    }

    pub fn save_uint64<'k>(&mut self, key: impl Into<Key<'k>>, value: u64) -> bool {
        self.writer.set_uint64(&mut self.root, key, value)
    }

    pub fn save_double<'k>(&mut self, key: impl Into<Key<'k>>, value: f64) -> bool {
        self.writer.set_double(&mut self.root, key, value)
    }

    pub fn save_string<'k>(&mut self, key: impl Into<Key<'k>>, value: &str) -> bool {
        self.writer.set_string(&mut self.root, key, value)
    }

    // Read side. A malformed source short-circuits every call.

    pub fn start_load_object<'k>(&mut self, key: impl Into<Key<'k>>) -> bool {
        !self.has_error() && self.reader.start_object(&self.root, key)
    }

    pub fn end_load_object(&mut self) -> bool {
        self.reader.end_object()
    }

    /// Enters the array at `key` and returns its length, or 0 if there is none.
    pub fn start_load_array<'k>(&mut self, key: impl Into<Key<'k>>) -> usize {
        if self.has_error() {
            return 0;
        }
        self.reader.start_array(&self.root, key)
    }

    pub fn end_load_array(&mut self) -> bool {
        self.reader.end_array(&self.root)
    }

    /// Returns the length of the array at `key` in the read scope, if any.
    pub fn load_array_len<'k>(&self, key: impl Into<Key<'k>>) -> Option<usize> {
        if self.has_error() {
            return None;
        }
        self.reader.array_len(&self.root, key)
    }

    pub fn get_bool<'k>(&self, key: impl Into<Key<'k>>, default: bool) -> bool {
        if self.has_error() {
            return default;
        }
        self.reader.get_bool(&self.root, key, default)
    }

    pub fn get_int<'k>(&self, key: impl Into<Key<'k>>, default: i32) -> i32 {
        if self.has_error() {
            return default;
        }
        self.reader.get_int(&self.root, key, default)
    }

    pub fn get_uint<'k>(&self, key: impl Into<Key<'k>>, default: u32) -> u32 {
        if self.has_error() {
            return default;
        }
        self.reader.get_uint(&self.root, key, default)
    }

    pub fn get_int64<'k>(&self, key: impl Into<Key<'k>>, default: i64) -> i64 {
        if self.has_error() {
            return default;
        }
        self.reader.get_int64(&self.root, key, default)
    }

    pub fn get_uint64<'k>(&self, key: impl Into<Key<'k>>, default: u64) -> u64 {
        if self.has_error() {
            return default;
        }
        self.reader.get_uint64(&self.root, key, default)
    }

    pub fn get_double<'k>(&self, key: impl Into<Key<'k>>, default: f64) -> f64 {
        if self.has_error() {
            return default;
        }
        self.reader.get_double(&self.root, key, default)
    }

    pub fn get_string<'k>(&self, key: impl Into<Key<'k>>, default: &str) -> String {
        if self.has_error() {
            return default.to_string();
        }
        self.reader.get_string(&self.root, key, default)
    }
}
