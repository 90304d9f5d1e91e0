//! Syntax types for slash-delimited path expressions.

/// The literal segment that flattens the array at the current position.
pub const WILDCARD: &str = "[n]";

/// A traversal segment in a slash path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Named field (`items`, `name`, even an empty string from `a//b`)
    Key(String),
    /// Array flatten marker (`[n]`)
    Wildcard,
}

impl Segment {
    /// Classifies a raw segment produced by splitting a path on `/`.
    pub fn from_raw(raw: &str) -> Self {
        if raw == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(raw.to_string())
        }
    }
}

/// A parsed slash path: the traversal prefix plus the final accessor.
///
/// The accessor is taken verbatim from the last segment; a trailing `[n]`
/// is looked up as an ordinary field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlashPath {
    /// Segments followed before the accessor is applied.
    pub prefix: Vec<Segment>,
    /// Field extracted at the position reached by the prefix.
    pub accessor: String,
}

impl SlashPath {
    /// Creates a new path from its prefix and accessor.
    pub fn new(prefix: Vec<Segment>, accessor: impl Into<String>) -> Self {
        Self {
            prefix,
            accessor: accessor.into(),
        }
    }
}

/// One or more path strings, in the order their results are reported.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathSet(Vec<String>);

impl PathSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for PathSet {
    fn from(path: &str) -> Self {
        PathSet(vec![path.to_string()])
    }
}

impl From<String> for PathSet {
    fn from(path: String) -> Self {
        PathSet(vec![path])
    }
}

impl From<&String> for PathSet {
    fn from(path: &String) -> Self {
        PathSet(vec![path.clone()])
    }
}

impl<S: AsRef<str>> From<Vec<S>> for PathSet {
    fn from(paths: Vec<S>) -> Self {
        PathSet(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for PathSet {
    fn from(paths: &[S]) -> Self {
        PathSet(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> From<[S; N]> for PathSet {
    fn from(paths: [S; N]) -> Self {
        PathSet(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }
}
