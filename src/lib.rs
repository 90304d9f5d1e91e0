//! slashpick - pull values out of nested JSON/YAML documents with
//! slash-delimited paths.
//!
//! The [`query`] module holds the path engine. [`document`] loads inputs,
//! [`store`] fetches documents by name, and [`config`] carries user settings.

pub mod config;
pub mod document;
pub mod query;
pub mod store;
