//! Write-side document cursor.
//!
//! The [`Writer`] navigates into objects and arrays, creating them when they
//! are missing, and writes typed scalars at the current scope. It stores
//! only its [`ScopeTracker`]; the root is passed to every call and the
//! current node is resolved again each time.
//!
//! Every operation returns `false` and leaves the tree untouched when its
//! arguments do not fit the current scope.
//!
//! # Example
//!
//! ```
//! use settingsquill::cursor::writer::Writer;
//! use settingsquill::document::node::Node;
//! use settingsquill::document::parser::to_json_string;
//!
//! let mut root = Node::empty_object();
//! let mut writer = Writer::new();
//!
//! assert!(writer.start_object(&mut root, "Group1"));
//! assert!(writer.set_int(&mut root, "Prop1", 11));
//! assert!(writer.start_array(&mut root, "Prop4", true));
//! assert!(writer.set_int(&mut root, 0, 22));
//! assert!(writer.set_int(&mut root, 1, 33));
//! assert!(writer.end_array(&root));
//! assert!(writer.end_object());
//!
//! let text = to_json_string(&root, false, 0).unwrap();
//! assert_eq!(text, r#"{"Group1":{"Prop1":11,"Prop4":[22,33]}}"#);
//! ```

use super::scope::{Key, ScopeTracker, Segment};
use crate::document::node::{Node, NodeKind};
use crate::document::pointer::{place, resolve, resolve_mut};

#[derive(Debug, Clone, Default)]
pub struct Writer {
    scope: ScopeTracker,
}

impl Writer {
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

    fn current<'a>(&self, root: &'a mut Node) -> Option<&'a mut Node> {
        let current = resolve_mut(root, self.scope.segments());
        if current.is_none() {
            tracing::debug!(scope = %self.scope, "write scope no longer resolves");
        }
        current
    }

    /// Enters the object at `key`, creating it when needed.
    ///
    /// By name: the current scope must be an object. A missing member, or a
    /// member of another kind, is replaced by an empty object; an existing
    /// object is reused with its content.
    ///
    /// By index: the current scope must be an array. An index at or past the
    /// end appends a new object and the scope records the slot it landed
    /// in. An existing element that is not an object is left alone and the
    /// call fails.
    pub fn start_object<'k>(&mut self, root: &mut Node, key: impl Into<Key<'k>>) -> bool {
        self.start_container(root, key.into(), NodeKind::Object, false)
    }

    /// Leaves the current scope. Fails at the root.
    pub fn end_object(&mut self) -> bool {
        if self.scope.pop().is_none() {
            tracing::debug!("end_object called at the root scope");
            return false;
        }
        true
    }

    /// Enters the array at `key`, creating it when needed.
    ///
    /// Follows [`Writer::start_object`], except that with `overwrite` set the
    /// destination is always replaced by a fresh empty array, even when an
    /// array is already there.
    pub fn start_array<'k>(
        &mut self,
        root: &mut Node,
        key: impl Into<Key<'k>>,
        overwrite: bool,
    ) -> bool {
        self.start_container(root, key.into(), NodeKind::Array, overwrite)
    }

    /// Leaves the current array scope.
    ///
    /// Fails when the current scope is not an array or is the root.
    pub fn end_array(&mut self, root: &Node) -> bool {
        match resolve(root, self.scope.segments()) {
            Some(Node::Array(_)) => self.end_object(),
            _ => {
                tracing::debug!(scope = %self.scope, "end_array outside an array scope");
                false
            }
        }
    }

    pub fn set_bool<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: bool) -> bool {
        self.set_node(root, key, Node::Bool(value))
    }

    pub fn set_int<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: i32) -> bool {
        self.set_node(root, key, Node::Int(value))
    }

    pub fn set_uint<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: u32) -> bool {
        self.set_node(root, key, Node::UInt(value))
    }

    pub fn set_int64<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: i64) -> bool {
        self.set_node(root, key, Node::Int64(value))
    }

    pub fn set_uint64<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: u64) -> bool {
        self.set_node(root, key, Node::UInt64(value))
    }

    pub fn set_double<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: f64) -> bool {
        self.set_node(root, key, Node::Double(value))
    }

    pub fn set_string<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, value: &str) -> bool {
        self.set_node(root, key, Node::String(value.to_string()))
    }

    /// Writes `node` at `key` in the current scope.
    ///
    /// By name, the current scope must be an object and any existing member
    /// is replaced whatever its kind. By index, the current scope must be an
    /// array; an index below the length overwrites in place and an index at
    /// or past the length appends one element.
    pub fn set_node<'k>(&self, root: &mut Node, key: impl Into<Key<'k>>, node: Node) -> bool {
        let key: Key<'_> = key.into();
        let Some(segment) = key.to_segment() else {
            tracing::debug!(?key, "rejected write key");
            return false;
        };
        let Some(current) = self.current(root) else {
            return false;
        };

        match (current, segment) {
            (Node::Object(members), Segment::Name(name)) => {
                members.insert(name, node);
                true
            }
            (Node::Array(elements), Segment::Index(index)) => {
                place(elements, index, node);
                true
            }
            (current, segment) => {
                tracing::debug!(
                    scope = %self.scope,
                    kind = %current.kind(),
                    %segment,
                    "write key does not fit the current scope"
                );
                false
            }
        }
    }

    fn start_container(
        &mut self,
        root: &mut Node,
        key: Key<'_>,
        kind: NodeKind,
        overwrite: bool,
    ) -> bool {
        let Some(segment) = key.to_segment() else {
            tracing::debug!(?key, "rejected scope key");
            return false;
        };
        let Some(current) = self.current(root) else {
            return false;
        };
        let fresh = || match kind {
            NodeKind::Array => Node::empty_array(),
            _ => Node::empty_object(),
        };

        let entered = match (current, segment) {
            (Node::Object(members), Segment::Name(name)) => {
                let reusable = members
                    .get(name.as_str())
                    .is_some_and(|existing| existing.kind() == kind && !overwrite);
                if !reusable {
                    members.insert(name.clone(), fresh());
                }
                Ok(Segment::Name(name))
            }
            (Node::Array(elements), Segment::Index(index)) => {
                if index >= elements.len() {
                    Ok(Segment::Index(place(elements, index, fresh())))
                } else if overwrite {
                    elements[index] = fresh();
                    Ok(Segment::Index(index))
                } else if elements[index].kind() == kind {
                    Ok(Segment::Index(index))
                } else {
                    Err(Segment::Index(index))
                }
            }
            (_, segment) => Err(segment),
        };

        match entered {
            Ok(segment) => {
                self.scope.push(segment);
                true
            }
            Err(segment) => {
                tracing::debug!(scope = %self.scope, %segment, %kind, "cannot enter scope");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_json;

    fn object_root() -> Node {
        Node::empty_object()
    }

    #[test]
    fn test_start_object_creates_member() {
        let mut root = object_root();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, "a"));
        assert_eq!(writer.scope().pointer(), "/a");
        assert_eq!(root, parse_json(r#"{"a": {}}"#).unwrap());
    }

    #[test]
    fn test_start_object_reuses_existing_object() {
        let mut root = parse_json(r#"{"a": {"keep": 1}}"#).unwrap();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, "a"));
        assert!(writer.set_int(&mut root, "add", 2));
        assert_eq!(root, parse_json(r#"{"a": {"keep": 1, "add": 2}}"#).unwrap());
    }

    #[test]
    fn test_start_object_replaces_wrong_kind_member() {
        let mut root = parse_json(r#"{"a": 5}"#).unwrap();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, "a"));
        assert_eq!(root, parse_json(r#"{"a": {}}"#).unwrap());
    }

    #[test]
    fn test_start_object_rejects_empty_name_and_wrong_scope() {
        let mut root = object_root();
        let mut writer = Writer::new();

        assert!(!writer.start_object(&mut root, ""));
        assert!(!writer.start_object(&mut root, 0));
        assert!(writer.scope().is_root());
        assert_eq!(root, object_root());
    }

    #[test]
    fn test_start_object_by_index_does_not_correct_kind() {
        let mut root = parse_json("[1, {}]").unwrap();
        let mut writer = Writer::new();

        assert!(!writer.start_object(&mut root, 0));
        assert!(writer.scope().is_root());
        assert!(writer.start_object(&mut root, 1));
        assert_eq!(writer.scope().pointer(), "/1");
        assert!(writer.end_object());

        assert!(writer.start_object(&mut root, 2));
        assert_eq!(root, parse_json("[1, {}, {}]").unwrap());
    }

    #[test]
    fn test_start_past_the_end_records_landing_slot() {
        let mut root = parse_json("[1]").unwrap();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, 7));
        assert_eq!(writer.scope().pointer(), "/1");
        assert!(writer.set_int(&mut root, "v", 2));
        assert!(writer.end_object());
        assert_eq!(root, parse_json(r#"[1, {"v": 2}]"#).unwrap());
    }

    #[test]
    fn test_negative_index_is_rejected() {
        let mut root = Node::empty_array();
        let mut writer = Writer::new();

        assert!(!writer.start_object(&mut root, -1));
        assert!(!writer.set_int(&mut root, -1, 3));
        assert!(root.is_empty());
    }

    #[test]
    fn test_start_array_overwrites_existing_array() {
        let mut root = parse_json(r#"{"list": [1, 2, 3]}"#).unwrap();
        let mut writer = Writer::new();

        assert!(writer.start_array(&mut root, "list", true));
        assert_eq!(root, parse_json(r#"{"list": []}"#).unwrap());
    }

    #[test]
    fn test_start_array_without_overwrite_reuses() {
        let mut root = parse_json(r#"{"list": [1, 2, 3]}"#).unwrap();
        let mut writer = Writer::new();

        assert!(writer.start_array(&mut root, "list", false));
        assert!(writer.set_int(&mut root, 3, 4));
        assert_eq!(root, parse_json(r#"{"list": [1, 2, 3, 4]}"#).unwrap());
    }

    #[test]
    fn test_start_array_by_index() {
        let mut root = parse_json(r#"[[1], "x"]"#).unwrap();
        let mut writer = Writer::new();

        assert!(!writer.start_array(&mut root, 1, false));
        assert!(writer.start_array(&mut root, 0, false));
        assert!(writer.end_array(&root));
        assert!(writer.start_array(&mut root, 1, true));
        assert!(writer.end_array(&root));
        assert_eq!(root, parse_json("[[1], []]").unwrap());
    }

    #[test]
    fn test_set_by_index_appends_and_overwrites() {
        let mut root = Node::empty_array();
        let writer = Writer::new();

        for i in 0..3 {
            assert!(writer.set_int(&mut root, i, i * 10));
            assert_eq!(root.len(), (i + 1) as usize);
        }
        assert!(writer.set_string(&mut root, 1, "ten"));
        assert_eq!(root.len(), 3);
        assert_eq!(root, parse_json(r#"[0, "ten", 20]"#).unwrap());
    }

    #[test]
    fn test_set_by_name_replaces_any_kind() {
        let mut root = parse_json(r#"{"v": {"deep": true}}"#).unwrap();
        let writer = Writer::new();

        assert!(writer.set_double(&mut root, "v", 0.25));
        assert_eq!(root.member("v"), Some(&Node::Double(0.25)));
    }

    #[test]
    fn test_set_key_must_match_scope_kind() {
        let mut root = object_root();
        let writer = Writer::new();

        assert!(!writer.set_bool(&mut root, 0, true));
        assert!(!writer.set_bool(&mut root, "", true));
        assert_eq!(root, object_root());
    }

    #[test]
    fn test_end_past_root_fails() {
        let mut root = object_root();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, "a"));
        assert!(writer.end_object());
        assert!(!writer.end_object());
        assert_eq!(writer.scope().pointer(), "");
    }

    #[test]
    fn test_end_array_requires_array_scope() {
        let mut root = object_root();
        let mut writer = Writer::new();

        assert!(writer.start_object(&mut root, "a"));
        assert!(!writer.end_array(&root));
        assert_eq!(writer.scope().pointer(), "/a");
    }
}
