//! Read-side document cursor.
//!
//! The [`Reader`] mirrors the [`Writer`](super::writer::Writer) navigation
//! surface but never creates nodes. Typed getters return the caller's
//! default whenever the value is missing, out of range, or of another kind.
//!
//! # Example
//!
//! ```
//! use settingsquill::cursor::reader::Reader;
//! use settingsquill::document::parser::parse_json;
//!
//! let root = parse_json(r#"{"Group1": {"Prop1": 11, "Prop4": [22, 33]}}"#).unwrap();
//! let mut reader = Reader::new();
//!
//! assert!(reader.start_object(&root, "Group1"));
//! assert_eq!(reader.get_int(&root, "Prop1", 0), 11);
//! assert_eq!(reader.get_int(&root, "Missing", 99), 99);
//!
//! assert_eq!(reader.start_array(&root, "Prop4"), 2);
//! assert_eq!(reader.get_int(&root, 0, 0), 22);
//! assert_eq!(reader.get_int(&root, 1, 0), 33);
//! assert!(reader.end_array(&root));
//! assert!(reader.end_object());
//! ```

use super::scope::{Key, ScopeTracker, Segment};
use crate::document::node::{Node, NodeKind};
use crate::document::pointer::resolve;

#[derive(Debug, Clone, Default)]
pub struct Reader {
    scope: ScopeTracker,
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scope.
    pub fn scope(&self) -> &ScopeTracker {
        &self.scope
    }

    /// Moves the cursor back to the root.
    pub fn reset(&mut self) {
        self.scope.clear();
    }

    fn current<'a>(&self, root: &'a Node) -> Option<&'a Node> {
        resolve(root, self.scope.segments())
    }

    /// Looks up the child at `key` below the current scope.
    fn child<'a>(&self, root: &'a Node, key: Key<'_>) -> Option<(Segment, &'a Node)> {
        let segment = key.to_segment()?;
        let child = match (self.current(root)?, &segment) {
            (Node::Object(members), Segment::Name(name)) => members.get(name.as_str())?,
            (Node::Array(elements), Segment::Index(index)) => elements.get(*index)?,
            _ => return None,
        };
        Some((segment, child))
    }

    fn enter(&mut self, root: &Node, key: Key<'_>, kind: NodeKind) -> Option<usize> {
        match self.child(root, key) {
            Some((segment, child)) if child.kind() == kind => {
                let len = child.len();
                self.scope.push(segment);
                Some(len)
            }
            _ => {
                tracing::debug!(scope = %self.scope, ?key, %kind, "cannot enter scope for reading");
                None
            }
        }
    }

    /// Enters the existing object at `key`.
    ///
    /// Fails without moving when the child is missing or not an object.
    pub fn start_object<'k>(&mut self, root: &Node, key: impl Into<Key<'k>>) -> bool {
        self.enter(root, key.into(), NodeKind::Object).is_some()
    }

    /// Leaves the current scope. Fails at the root.
    pub fn end_object(&mut self) -> bool {
        if self.scope.pop().is_none() {
            tracing::debug!("end_object called at the root scope");
            return false;
        }
        true
    }

    /// Enters the existing array at `key` and returns its length.
    ///
    /// Returns 0 without moving when the child is missing or not an array.
    /// An empty array also returns 0 but does enter the scope, so callers
    /// that need to tell the two apart should use [`Reader::array_len`]
    /// first.
    pub fn start_array<'k>(&mut self, root: &Node, key: impl Into<Key<'k>>) -> usize {
        self.enter(root, key.into(), NodeKind::Array).unwrap_or(0)
    }

    /// Returns the length of the array at `key` without entering it.
    pub fn array_len<'k>(&self, root: &Node, key: impl Into<Key<'k>>) -> Option<usize> {
        match self.child(root, key.into()) {
            Some((_, Node::Array(elements))) => Some(elements.len()),
            _ => None,
        }
    }

    /// Leaves the current array scope.
    ///
    /// Fails when the current scope is not an array or is the root.
    pub fn end_array(&mut self, root: &Node) -> bool {
        match self.current(root) {
            Some(Node::Array(_)) => self.end_object(),
            _ => {
                tracing::debug!(scope = %self.scope, "end_array outside an array scope");
                false
            }
        }
    }

    /// Returns the node at `key` in the current scope, if any.
    pub fn get_node<'a, 'k>(&self, root: &'a Node, key: impl Into<Key<'k>>) -> Option<&'a Node> {
        self.child(root, key.into()).map(|(_, node)| node)
    }

    pub fn get_bool<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: bool) -> bool {
        self.get_node(root, key)
            .and_then(Node::as_bool)
            .unwrap_or(default)
    }

    pub fn get_int<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: i32) -> i32 {
        self.get_node(root, key)
            .and_then(Node::as_i32)
            .unwrap_or(default)
    }

    pub fn get_uint<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: u32) -> u32 {
        self.get_node(root, key)
            .and_then(Node::as_u32)
            .unwrap_or(default)
    }

    pub fn get_int64<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: i64) -> i64 {
        self.get_node(root, key)
            .and_then(Node::as_i64)
            .unwrap_or(default)
    }

    pub fn get_uint64<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: u64) -> u64 {
        self.get_node(root, key)
            .and_then(Node::as_u64)
            .unwrap_or(default)
    }

    pub fn get_double<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: f64) -> f64 {
        self.get_node(root, key)
            .and_then(Node::as_f64)
            .unwrap_or(default)
    }

    pub fn get_string<'k>(&self, root: &Node, key: impl Into<Key<'k>>, default: &str) -> String {
        self.get_node(root, key)
            .and_then(Node::as_str)
            .unwrap_or(default)
            .to_string()
    }
}
