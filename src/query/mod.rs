//! Slash path queries over JSON-like documents.
//!
//! A path is split on `/`. The last segment is the accessor, the field read
//! at the end; the others are followed from the document root. Reaching an
//! array distributes the next lookup over its elements, drops empty results
//! and flattens one level.
//!
//! # Supported Syntax
//!
//! - `field` - Named field on an object
//! - `a/b/c` - Nested fields
//! - `items/name` - `name` of every element of `items`
//! - `items/[n]/name` - Flatten `items` first, then read `name` from each
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use slashpick::query::{extract, Extraction};
//!
//! let doc = json!({"items": [{"v": 1}, {"v": 2}, {"v": 0}]});
//! assert_eq!(extract(&doc, "items/v"), Some(Extraction::Single(json!([1, 2]))));
//! assert_eq!(extract(&doc, "items/missing/v"), Some(Extraction::Single(json!([]))));
//! assert_eq!(extract(&doc, "nope/v"), None);
//! ```

pub mod ast;
pub mod evaluator;
pub mod parser;
pub mod truthiness;

pub use ast::{PathSet, Segment, SlashPath, WILDCARD};
pub use evaluator::{extract, Evaluator, Extraction, Position};
pub use parser::Parser;
pub use truthiness::Truthiness;
