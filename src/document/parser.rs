//! JSON text conversion for settings nodes.
//!
//! Parsing and printing of JSON bytes is delegated to `serde_json`; this
//! module converts between `serde_json::Value` and our [`Node`] kinds.
//!
//! # Example
//!
//! ```
//! use settingsquill::document::parser::{parse_json, to_json_string};
//! use settingsquill::document::node::Node;
//!
//! let node = parse_json(r#"{"volume": 11, "ratio": 0.5}"#).unwrap();
//! assert_eq!(node.member("volume"), Some(&Node::Int(11)));
//!
//! let text = to_json_string(&node, false, 4).unwrap();
//! assert_eq!(text, r#"{"volume":11,"ratio":0.5}"#);
//! ```

use super::node::Node;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value as SerdeValue;

/// Parses a JSON string into a [`Node`].
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
pub fn parse_json(json_str: &str) -> Result<Node> {
    let value: SerdeValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(parse_value(&value))
}

/// Converts a `serde_json::Value` into a [`Node`].
///
/// Integers are stored in the narrowest kind that holds them, in the order
/// `Int`, `UInt`, `Int64`, `UInt64`.
pub fn parse_value(value: &SerdeValue) -> Node {
    match value {
        SerdeValue::Null => Node::Null,
        SerdeValue::Bool(b) => Node::Bool(*b),
        SerdeValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                narrow_signed(i)
            } else if let Some(u) = n.as_u64() {
                Node::UInt64(u)
            } else {
                Node::Double(n.as_f64().unwrap_or(0.0))
            }
        }
        SerdeValue::String(s) => Node::String(s.clone()),
        SerdeValue::Array(arr) => Node::Array(arr.iter().map(parse_value).collect()),
        SerdeValue::Object(obj) => {
            let members: IndexMap<String, Node> = obj
                .iter()
                .map(|(k, v)| (k.clone(), parse_value(v)))
                .collect();
            Node::Object(members)
        }
    }
}

fn narrow_signed(i: i64) -> Node {
    if let Ok(v) = i32::try_from(i) {
        Node::Int(v)
    } else if let Ok(v) = u32::try_from(i) {
        Node::UInt(v)
    } else {
        Node::Int64(i)
    }
}

/// Converts a [`Node`] into a `serde_json::Value`.
///
/// Non-finite doubles have no JSON form and become `null`.
pub fn to_serde_value(node: &Node) -> SerdeValue {
    match node {
        Node::Null => SerdeValue::Null,
        Node::Bool(b) => SerdeValue::Bool(*b),
        Node::Int(i) => SerdeValue::from(*i),
        Node::UInt(u) => SerdeValue::from(*u),
        Node::Int64(i) => SerdeValue::from(*i),
        Node::UInt64(u) => SerdeValue::from(*u),
        Node::Double(d) => SerdeValue::from(*d),
        Node::String(s) => SerdeValue::String(s.clone()),
        Node::Array(elements) => SerdeValue::Array(elements.iter().map(to_serde_value).collect()),
        Node::Object(members) => SerdeValue::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), to_serde_value(v)))
                .collect(),
        ),
    }
}

/// Serializes a [`Node`] to JSON text.
///
/// With `pretty` set, output is indented by `indent_size` spaces per level;
/// otherwise it is compact.
pub fn to_json_string(node: &Node, pretty: bool, indent_size: usize) -> Result<String> {
    let value = to_serde_value(node);

    if !pretty {
        return serde_json::to_string(&value).context("Failed to serialize JSON");
    }

    let indent = " ".repeat(indent_size);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    String::from_utf8(buffer).context("Serialized JSON is not valid UTF-8")
}
