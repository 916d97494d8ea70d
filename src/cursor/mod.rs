//! Scoped cursors over settings documents.
//!
//! # Modules
//!
//! - `scope`: the segment path of a cursor and its pointer rendering
//! - `writer`: navigates and writes, creating scopes as needed
//! - `reader`: navigates and reads, falling back to defaults
//!
//! Neither cursor keeps a reference into the tree between calls. Each call
//! receives the root and resolves the current scope from it.

pub mod reader;
pub mod scope;
pub mod writer;
