//! Errors raised while reading or writing top-level documents.

use thiserror::Error;

/// A top-level document could not be read or written.
#[derive(Debug, Error)]
pub enum Error {
    /// The object model rejected the document.
    #[error(transparent)]
    Model(#[from] ldslot::Error),
    /// The document names no type, so there is nothing to build.
    #[error("document has no `type`")]
    MissingType,
    /// None of the document's type names is part of the vocabulary.
    #[error("no vocabulary type among {names:?}")]
    UnknownType {
        /// The names the document declared.
        names: Vec<String>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
