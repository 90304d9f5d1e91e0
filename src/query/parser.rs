//! Slash path string parser.

use super::ast::{Segment, SlashPath};

/// Parser for slash-delimited path strings.
pub struct Parser;

impl Parser {
    /// Parses a path string into a `SlashPath`.
    ///
    /// Returns `None` for the empty string, which has no segments and so
    /// names nothing. Every other input parses: the last segment becomes the
    /// accessor and the rest become the traversal prefix.
    pub fn parse(path: &str) -> Option<SlashPath> {
        if path.is_empty() {
            return None;
        }

        let mut raw: Vec<&str> = path.split('/').collect();
        let accessor = raw.pop()?;
        let prefix = raw.into_iter().map(Segment::from_raw).collect();

        Some(SlashPath::new(prefix, accessor))
    }
}
