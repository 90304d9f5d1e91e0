//! Named document retrieval.
//!
//! A `DocumentStore` hands out whole documents by name. `get_values` fetches
//! one and runs a path query against it; a failed fetch is logged and reads
//! as "nothing found" without touching the query engine.

pub mod error;

pub use error::StoreError;

use crate::document::loader::load_document_file;
use crate::query::{Evaluator, Extraction, PathSet, Truthiness};
use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// File suffixes tried, in order, when resolving a name in a directory.
pub const DOCUMENT_SUFFIXES: &[&str] = &[".json", ".json.gz", ".jsonl", ".yaml", ".yml"];

/// A source of named documents.
pub trait DocumentStore {
    fn fetch(&self, name: &str) -> Result<Value, StoreError>;
}

/// Documents stored as files under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the first existing file for `name`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf, StoreError> {
        if name.is_empty()
            || name == "."
            || name.contains("..")
            || name.contains('/')
            || name.contains('\\')
        {
            return Err(StoreError::InvalidName(name.to_string()));
        }

        DOCUMENT_SUFFIXES
            .iter()
            .map(|suffix| self.root.join(format!("{}{}", name, suffix)))
            .find(|candidate| candidate.is_file())
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

impl DocumentStore for DirectoryStore {
    fn fetch(&self, name: &str) -> Result<Value, StoreError> {
        let path = self.resolve(name)?;
        debug!("loading document '{}' from {}", name, path.display());

        load_document_file(&path).map_err(|err| StoreError::Load {
            name: name.to_string(),
            message: format!("{:#}", err),
        })
    }
}

/// Documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `document` under `name`, returning any document it replaces.
    pub fn insert(&mut self, name: impl Into<String>, document: Value) -> Option<Value> {
        self.documents.insert(name.into(), document)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.documents.remove(name)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn fetch(&self, name: &str) -> Result<Value, StoreError> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }
}

/// Fetches `name` from `store` and extracts `paths` from it.
///
/// Returns `None` if the document cannot be fetched or if no path matched.
pub fn get_values<S: DocumentStore + ?Sized>(
    store: &S,
    name: &str,
    paths: impl Into<PathSet>,
    truthiness: Truthiness,
) -> Option<Extraction> {
    let document = match store.fetch(name) {
        Ok(document) => document,
        Err(err) => {
            warn!("{}", err);
            return None;
        }
    };

    Evaluator::with_truthiness(&document, truthiness).extract(paths)
}
