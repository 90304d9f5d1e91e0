//! Document I/O.
//!
//! Documents are plain `serde_json::Value` trees with object keys kept in
//! source order. This module loads them from files or stdin.

pub mod loader;

pub use loader::{load_document_file, load_document_from_stdin, parse_document, Format};
