//! Error types for the editor

use thiserror::Error;

/// Violations of the page tree invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TreeError {
    #[error("Tree has no root element")]
    MissingRoot,

    #[error("Tree has {0} root elements")]
    MultipleRoots(usize),

    #[error("Root element must be the first top-level element")]
    RootNotOutermost,

    #[error("Root element cannot be a leaf")]
    RootNotContainer,

    #[error("Duplicate element id: {0}")]
    DuplicateId(String),

    #[error("Element has an empty id")]
    EmptyId,
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tree: {0}")]
    InvalidTree(#[from] TreeError),
}
