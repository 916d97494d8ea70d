//! Path resolution over a node tree.
//!
//! Resolution is a pure function of a root and a segment list. Cursors call
//! it at the top of every operation instead of keeping node references
//! alive, since creating a node may move its siblings in memory.

use super::node::Node;
use crate::cursor::scope::{ScopeTracker, Segment};

/// Gets an immutable reference to the node at `segments`.
///
/// A [`Segment::Name`] only descends into objects and a [`Segment::Index`]
/// only into arrays. Returns `None` on any missing step or kind mismatch.
///
/// # Example
///
/// ```
/// use settingsquill::document::parser::parse_json;
/// use settingsquill::document::pointer::resolve;
/// use settingsquill::cursor::scope::Segment;
/// use settingsquill::document::node::Node;
///
/// let root = parse_json(r#"{"items": [1, 2]}"#).unwrap();
/// let path = [Segment::Name("items".into()), Segment::Index(1)];
/// assert_eq!(resolve(&root, &path), Some(&Node::Int(2)));
///
/// let missing = [Segment::Name("items".into()), Segment::Index(9)];
/// assert!(resolve(&root, &missing).is_none());
/// ```
pub fn resolve<'a>(root: &'a Node, segments: &[Segment]) -> Option<&'a Node> {
    let mut current = root;

    for segment in segments {
        current = match (current, segment) {
            (Node::Object(members), Segment::Name(name)) => members.get(name.as_str())?,
            (Node::Array(elements), Segment::Index(index)) => elements.get(*index)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Gets a mutable reference to the node at `segments`.
///
/// Follows the same rules as [`resolve`].
pub fn resolve_mut<'a>(root: &'a mut Node, segments: &[Segment]) -> Option<&'a mut Node> {
    let mut current = root;

    for segment in segments {
        current = match (current, segment) {
            (Node::Object(members), Segment::Name(name)) => members.get_mut(name.as_str())?,
            (Node::Array(elements), Segment::Index(index)) => elements.get_mut(*index)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Resolves a rendered pointer such as `/Group1/Prop4/0`.
///
/// Returns `None` for malformed pointers as well as missing nodes.
pub fn resolve_pointer<'a>(root: &'a Node, pointer: &str) -> Option<&'a Node> {
    let scope = ScopeTracker::parse(pointer)?;
    resolve(root, scope.segments())
}

/// Writes `node` at `index` of `elements` and returns the slot it landed in.
///
/// Any index at or past the end appends exactly one element, so the
/// returned slot is `len()` in that case.
pub fn place(elements: &mut Vec<Node>, index: usize, node: Node) -> usize {
    if index < elements.len() {
        elements[index] = node;
        index
    } else {
        elements.push(node);
        elements.len() - 1
    }
}
