//! Error types for document retrieval.

use std::fmt;

/// Errors that can occur while fetching a named document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The name is empty or would escape the store.
    InvalidName(String),
    /// No document is stored under the name.
    NotFound(String),
    /// The document exists but could not be read or parsed.
    Load { name: String, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidName(name) => write!(f, "Invalid document name '{}'", name),
            StoreError::NotFound(name) => write!(f, "Document '{}' not found", name),
            StoreError::Load { name, message } => {
                write!(f, "Failed to load document '{}': {}", name, message)
            }
        }
    }
}

impl std::error::Error for StoreError {}
