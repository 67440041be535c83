//! Error types for the zoo excursion

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a catalog table
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog has no enclosures")]
    Empty,

    #[error("Enclosure #{index} has an empty description")]
    MissingDescription { index: usize },

    #[error("Enclosure '{description}' has no animals")]
    NoAnimals { description: String },
}

/// Errors that end the session loop early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input stream closed while waiting for the visitor")]
    InputClosed,
}
