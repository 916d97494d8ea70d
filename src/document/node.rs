//! Node representation for settings documents.
//!
//! This module provides the closed set of value kinds a settings document can
//! hold. Every accessor matches exhaustively on [`Node`], so a kind can never
//! silently fall through a type check.
//!
//! # Example
//!
//! ```
//! use settingsquill::document::node::{Node, NodeKind};
//! use indexmap::IndexMap;
//!
//! let mut members = IndexMap::new();
//! members.insert("volume".to_string(), Node::Int(11));
//! members.insert("name".to_string(), Node::String("main".to_string()));
//! let node = Node::Object(members);
//!
//! assert_eq!(node.kind(), NodeKind::Object);
//! assert_eq!(node.member("volume").and_then(Node::as_i32), Some(11));
//! ```

use indexmap::IndexMap;
use std::fmt;

/// A value in a settings document.
///
/// Integers carry the width they were written or parsed with. Reading an
/// integer back is decided by whether the stored value fits the requested
/// width, not by the variant alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// A JSON null
    #[default]
    Null,
    /// A boolean
    Bool(bool),
    /// A 32-bit signed integer
    Int(i32),
    /// A 32-bit unsigned integer
    UInt(u32),
    /// A 64-bit signed integer
    Int64(i64),
    /// A 64-bit unsigned integer
    UInt64(u64),
    /// A floating point number
    Double(f64),
    /// A UTF-8 string
    String(String),
    /// An ordered list of nodes
    Array(Vec<Node>),
    /// Named members in insertion order
    Object(IndexMap<String, Node>),
}

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Null,
    Bool,
    Int,
    UInt,
    Int64,
    UInt64,
    Double,
    String,
    Array,
    Object,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Null => "null",
            NodeKind::Bool => "bool",
            NodeKind::Int => "int",
            NodeKind::UInt => "uint",
            NodeKind::Int64 => "int64",
            NodeKind::UInt64 => "uint64",
            NodeKind::Double => "double",
            NodeKind::String => "string",
            NodeKind::Array => "array",
            NodeKind::Object => "object",
        };
        f.write_str(name)
    }
}

impl Node {
    /// Creates an empty object node.
    pub fn empty_object() -> Self {
        Node::Object(IndexMap::new())
    }

    /// Creates an empty array node.
    pub fn empty_array() -> Self {
        Node::Array(Vec::new())
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Null => NodeKind::Null,
            Node::Bool(_) => NodeKind::Bool,
            Node::Int(_) => NodeKind::Int,
            Node::UInt(_) => NodeKind::UInt,
            Node::Int64(_) => NodeKind::Int64,
            Node::UInt64(_) => NodeKind::UInt64,
            Node::Double(_) => NodeKind::Double,
            Node::String(_) => NodeKind::String,
            Node::Array(_) => NodeKind::Array,
            Node::Object(_) => NodeKind::Object,
        }
    }

    /// Returns true if this node is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use settingsquill::document::node::Node;
    ///
    /// assert!(Node::empty_object().is_object());
    /// assert!(!Node::Int(42).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, Node::Object(_))
    }

    /// Returns true if this node is an array.
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    /// Returns the named member of an object node.
    pub fn member(&self, name: &str) -> Option<&Node> {
        match self {
            Node::Object(members) => members.get(name),
            _ => None,
        }
    }

    /// Returns the element at `index` of an array node.
    pub fn element(&self, index: usize) -> Option<&Node> {
        match self {
            Node::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Number of elements for arrays, members for objects, zero otherwise.
    pub fn len(&self) -> usize {
        match self {
            Node::Array(elements) => elements.len(),
            Node::Object(members) => members.len(),
            Node::Null
            | Node::Bool(_)
            | Node::Int(_)
            | Node::UInt(_)
            | Node::Int64(_)
            | Node::UInt64(_)
            | Node::Double(_)
            | Node::String(_) => 0,
        }
    }

    /// Returns true if this node has no elements or members.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer payload widened to i128, for any integer kind.
    fn as_integer(&self) -> Option<i128> {
        match self {
            Node::Int(i) => Some(i128::from(*i)),
            Node::UInt(u) => Some(i128::from(*u)),
            Node::Int64(i) => Some(i128::from(*i)),
            Node::UInt64(u) => Some(i128::from(*u)),
            Node::Null
            | Node::Bool(_)
            | Node::Double(_)
            | Node::String(_)
            | Node::Array(_)
            | Node::Object(_) => None,
        }
    }

    /// Returns the value as `i32` if it is an integer that fits.
    ///
    /// # Example
    ///
    /// ```
    /// use settingsquill::document::node::Node;
    ///
    /// assert_eq!(Node::UInt64(7).as_i32(), Some(7));
    /// assert_eq!(Node::Int64(i64::MAX).as_i32(), None);
    /// assert_eq!(Node::Double(7.0).as_i32(), None);
    /// ```
    pub fn as_i32(&self) -> Option<i32> {
        self.as_integer().and_then(|i| i32::try_from(i).ok())
    }

    pub fn as_u32(&self) -> Option<u32> {
        self.as_integer().and_then(|i| u32::try_from(i).ok())
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_integer().and_then(|i| i64::try_from(i).ok())
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.as_integer().and_then(|i| u64::try_from(i).ok())
    }

    /// Returns the value of a `Double` node. Integers are not widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Node::Bool(value)
    }
}

impl From<i32> for Node {
    fn from(value: i32) -> Self {
        Node::Int(value)
    }
}

impl From<u32> for Node {
    fn from(value: u32) -> Self {
        Node::UInt(value)
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Node::Int64(value)
    }
}

impl From<u64> for Node {
    fn from(value: u64) -> Self {
        Node::UInt64(value)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Node::Double(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::String(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_width_checks() {
        let small = Node::Int(-5);
        assert_eq!(small.as_i32(), Some(-5));
        assert_eq!(small.as_i64(), Some(-5));
        assert_eq!(small.as_u32(), None);
        assert_eq!(small.as_u64(), None);

        let big = Node::UInt64(u64::MAX);
        assert_eq!(big.as_u64(), Some(u64::MAX));
        assert_eq!(big.as_i64(), None);
        assert_eq!(big.as_u32(), None);

        let mid = Node::UInt(3_000_000_000);
        assert_eq!(mid.as_i32(), None);
        assert_eq!(mid.as_u32(), Some(3_000_000_000));
        assert_eq!(mid.as_i64(), Some(3_000_000_000));
    }

    #[test]
    fn test_double_is_not_an_integer() {
        let node = Node::Double(2.0);
        assert_eq!(node.as_f64(), Some(2.0));
        assert_eq!(node.as_i32(), None);
        assert_eq!(Node::Int(2).as_f64(), None);
    }

    #[test]
    fn test_len_and_kind() {
        let arr = Node::Array(vec![Node::Null, Node::Bool(true)]);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.kind(), NodeKind::Array);
        assert_eq!(Node::String("abc".into()).len(), 0);
        assert!(Node::empty_object().is_empty());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::UInt64.to_string(), "uint64");
        assert_eq!(NodeKind::Object.to_string(), "object");
    }

    #[test]
    fn test_member_and_element() {
        let mut members = IndexMap::new();
        members.insert("a".to_string(), Node::from("x"));
        let obj = Node::Object(members);
        assert_eq!(obj.member("a").and_then(Node::as_str), Some("x"));
        assert!(obj.member("b").is_none());
        assert!(obj.element(0).is_none());

        let arr = Node::Array(vec![Node::from(1.5)]);
        assert_eq!(arr.element(0).and_then(Node::as_f64), Some(1.5));
        assert!(arr.element(1).is_none());
    }
}
