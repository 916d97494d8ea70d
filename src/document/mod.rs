//! Settings document model.
//!
//! - `node`: the closed set of value kinds
//! - `parser`: conversion to and from JSON text
//! - `pointer`: resolving segment paths against a root
//! - `tree`: the [`Document`](tree::Document) that owns a root and its cursors

pub mod node;
pub mod parser;
pub mod pointer;
pub mod tree;
