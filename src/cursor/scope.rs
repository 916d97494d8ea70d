//! Scope tracking for document cursors.
//!
//! A [`ScopeTracker`] records where a cursor currently is as a list of
//! [`Segment`]s, from the document root down to the current object or array.
//! It also keeps the pointer rendering of that list (`""` at the root,
//! `/Group1/Prop4/0` deeper down). The segment list is the source of truth;
//! the rendered string is rebuilt from it on every push and pop.
//!
//! The tracker never touches a tree. Whether a segment actually leads
//! anywhere is checked by the cursor that owns it.
//!
//! # Example
//!
//! ```
//! use settingsquill::cursor::scope::{ScopeTracker, Segment};
//!
//! let mut scope = ScopeTracker::new();
//! assert_eq!(scope.pointer(), "");
//!
//! scope.push(Segment::Name("Group1".to_string()));
//! scope.push(Segment::Name("Prop4".to_string()));
//! scope.push(Segment::Index(0));
//! assert_eq!(scope.pointer(), "/Group1/Prop4/0");
//!
//! scope.pop();
//! assert_eq!(scope.pointer(), "/Group1/Prop4");
//! ```

use std::fmt;

/// One step of a scope path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// An object member
    Name(String),
    /// An array element
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => write!(f, "{}", escape_token(name)),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// The address of a child relative to the current scope, as passed by callers.
///
/// Indices are signed so that a negative index can be passed and rejected
/// like any other out-of-contract argument.
///
/// ```
/// use settingsquill::cursor::scope::Key;
///
/// assert_eq!(Key::from("Prop1"), Key::Name("Prop1"));
/// assert_eq!(Key::from(3), Key::Index(3));
/// assert_eq!(Key::from(-1), Key::Index(-1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    Name(&'a str),
    Index(i64),
}

impl<'a> Key<'a> {
    /// Converts the key into a segment, or `None` for an empty name or a
    /// negative index.
    pub fn to_segment(self) -> Option<Segment> {
        match self {
            Key::Name("") => None,
            Key::Name(name) => Some(Segment::Name(name.to_string())),
            Key::Index(index) => usize::try_from(index).ok().map(Segment::Index),
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(value: &'a str) -> Self {
        Key::Name(value)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(value: &'a String) -> Self {
        Key::Name(value.as_str())
    }
}

impl From<i32> for Key<'_> {
    fn from(value: i32) -> Self {
        Key::Index(i64::from(value))
    }
}

impl From<i64> for Key<'_> {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<u32> for Key<'_> {
    fn from(value: u32) -> Self {
        Key::Index(i64::from(value))
    }
}

impl From<usize> for Key<'_> {
    fn from(value: usize) -> Self {
        Key::Index(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// The current navigation path of a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeTracker {
    segments: Vec<Segment>,
    rendered: String,
}

impl ScopeTracker {
    /// Creates a tracker positioned at the root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a tracker from a rendered pointer.
    ///
    /// `~0` and `~1` are unescaped to `~` and `/`. Tokens made only of digits
    /// (without a leading zero) become [`Segment::Index`]; everything else
    /// becomes [`Segment::Name`]. Returns `None` if the pointer is neither
    /// empty nor starts with `/`, or contains a malformed escape.
    ///
    /// ```
    /// use settingsquill::cursor::scope::{ScopeTracker, Segment};
    ///
    /// let scope = ScopeTracker::parse("/a~1b/2").unwrap();
    /// assert_eq!(
    ///     scope.segments(),
    ///     &[Segment::Name("a/b".to_string()), Segment::Index(2)]
    /// );
    /// assert!(ScopeTracker::parse("no-slash").is_none());
    /// ```
    pub fn parse(pointer: &str) -> Option<Self> {
        let mut scope = Self::new();
        if pointer.is_empty() {
            return Some(scope);
        }

        let rest = pointer.strip_prefix('/')?;
        for token in rest.split('/') {
            let token = unescape_token(token)?;
            scope.push(token_to_segment(token));
        }

        Some(scope)
    }

    /// Appends a segment, moving one scope deeper.
    pub fn push(&mut self, segment: Segment) {
        self.rendered.push('/');
        self.rendered.push_str(&segment.to_string());
        self.segments.push(segment);
    }

    /// Removes the last segment, moving one scope up.
    ///
    /// Returns `None` and leaves the tracker untouched when already at the root.
    pub fn pop(&mut self) -> Option<Segment> {
        let segment = self.segments.pop()?;
        self.rendered = render(&self.segments);
        Some(segment)
    }

    /// Returns the segments from the root to the current scope.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the rendered pointer of the current scope.
    pub fn pointer(&self) -> &str {
        &self.rendered
    }

    /// Number of scopes entered below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns to the root.
    pub fn clear(&mut self) {
        self.segments.clear();
        self.rendered.clear();
    }
}

impl fmt::Display for ScopeTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Renders segments to a pointer string.
pub fn render(segments: &[Segment]) -> String {
    let mut rendered = String::new();
    for segment in segments {
        rendered.push('/');
        rendered.push_str(&segment.to_string());
    }
    rendered
}

fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn unescape_token(token: &str) -> Option<String> {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars();
    while let Some(ch) = chars.next() {
        if ch == '~' {
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                _ => return None,
            }
        } else {
            out.push(ch);
        }
    }
    Some(out)
}

fn token_to_segment(token: String) -> Segment {
    let numeric = !token.is_empty()
        && token.bytes().all(|b| b.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));

    if numeric {
        if let Ok(index) = token.parse::<usize>() {
            return Segment::Index(index);
        }
    }
    Segment::Name(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_is_root() {
        let scope = ScopeTracker::new();
        assert!(scope.is_root());
        assert_eq!(scope.depth(), 0);
        assert_eq!(scope.pointer(), "");
    }

    #[test]
    fn test_pop_at_root_fails_without_change() {
        let mut scope = ScopeTracker::new();
        assert_eq!(scope.pop(), None);
        assert_eq!(scope.pointer(), "");
    }

    #[test]
    fn test_push_pop_keeps_rendering_in_sync() {
        let mut scope = ScopeTracker::new();
        scope.push(Segment::Name("a".into()));
        scope.push(Segment::Index(10));
        scope.push(Segment::Name("b".into()));
        assert_eq!(scope.pointer(), "/a/10/b");

        assert_eq!(scope.pop(), Some(Segment::Name("b".into())));
        assert_eq!(scope.pointer(), "/a/10");
        assert_eq!(scope.pop(), Some(Segment::Index(10)));
        assert_eq!(scope.pointer(), "/a");
        assert_eq!(scope.pop(), Some(Segment::Name("a".into())));
        assert_eq!(scope.pointer(), "");
    }

    #[test]
    fn test_empty_and_slashed_names_render_unambiguously() {
        let mut scope = ScopeTracker::new();
        scope.push(Segment::Name("".into()));
        scope.push(Segment::Name("x/y".into()));
        scope.push(Segment::Name("~".into()));
        assert_eq!(scope.pointer(), "//x~1y/~0");

        scope.pop();
        assert_eq!(scope.pointer(), "//x~1y");
        scope.pop();
        assert_eq!(scope.pointer(), "/");
        scope.pop();
        assert_eq!(scope.pointer(), "");
    }

    #[test]
    fn test_parse_round_trips_rendering() {
        let scope = ScopeTracker::parse("/Group1/Prop4/0").unwrap();
        assert_eq!(
            scope.segments(),
            &[
                Segment::Name("Group1".into()),
                Segment::Name("Prop4".into()),
                Segment::Index(0),
            ]
        );
        assert_eq!(scope.pointer(), "/Group1/Prop4/0");
    }

    #[test]
    fn test_parse_leading_zero_is_a_name() {
        let scope = ScopeTracker::parse("/007").unwrap();
        assert_eq!(scope.segments(), &[Segment::Name("007".into())]);
    }

    #[test]
    fn test_parse_rejects_bad_escape() {
        assert!(ScopeTracker::parse("/a~2").is_none());
        assert!(ScopeTracker::parse("/a~").is_none());
    }

    #[test]
    fn test_key_to_segment() {
        assert_eq!(Key::Name("").to_segment(), None);
        assert_eq!(Key::Index(-1).to_segment(), None);
        assert_eq!(Key::Index(4).to_segment(), Some(Segment::Index(4)));
        assert_eq!(
            Key::from(&"n".to_string()).to_segment(),
            Some(Segment::Name("n".into()))
        );
    }
}
