//! Typed errors raised by the extraction engine.
//!
//! Engine operations return [anyhow::Result]. These types are raised unwrapped so that callers
//! can recover them with [anyhow::Error::downcast_ref].

/// Mismatch between a structural configuration and what the engine supports.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown criterion {0:?}, expected one of \"height\" or \"width\"")]
    UnknownCriterion(String),

    #[error("unknown object type {0:?}")]
    UnknownObjectType(String),

    #[error("unknown table method {0:?}")]
    UnknownTableMethod(String),

    #[error("invalid regular expression for pattern target {target:?}: {source}")]
    InvalidPattern {
        target: String,
        #[source]
        source: regex::Error,
    },
}

/// The document layout does not agree with an explicit expectation of the configuration.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected exactly one block anchor, found {found}")]
    UnexpectedBlockCount { found: usize },
}

/// Failure surfaced by a [crate::document::Document] implementation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentAccessError {
    #[error("no document is loaded")]
    NotLoaded,

    #[error("page {page} is out of range for a document of {page_count} pages")]
    PageOutOfRange { page: usize, page_count: usize },

    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("document backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl DocumentAccessError {
    /// Wraps an error from the underlying PDF library.
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}
