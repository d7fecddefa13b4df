//! Error types for document validation.

use thiserror::Error;

/// Why a document, or one of its parts, is not valid Collection+JSON.
///
/// Failures in nested parts keep the underlying cause as their
/// [`source`](std::error::Error::source) and record where it happened.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The document carries no version.
    #[error("version is missing, must be '{}'", crate::VERSION)]
    MissingVersion,

    /// The document carries a version other than the one supported.
    #[error("wrong version '{found}', must be '{}'", crate::VERSION)]
    WrongVersion { found: String },

    /// The document's own `href` is empty.
    #[error("document 'href' is empty, must contain the resource location")]
    MissingHref,

    /// A link or query has an empty `rel`.
    #[error("'rel' attr is empty")]
    EmptyRel,

    /// A link, item or query has an empty `href`.
    #[error("'href' attr is empty")]
    EmptyHref,

    #[error("link {index}: {source}")]
    Link {
        index: usize,
        source: Box<ValidationError>,
    },

    #[error("item {index}: {source}")]
    Item {
        index: usize,
        source: Box<ValidationError>,
    },

    #[error("query {index}: {source}")]
    Query {
        index: usize,
        source: Box<ValidationError>,
    },

    #[error("template: {source}")]
    Template { source: Box<ValidationError> },

    #[error("error: {source}")]
    Error { source: Box<ValidationError> },
}

impl ValidationError {
    pub(crate) fn link(index: usize, source: ValidationError) -> Self {
        Self::Link {
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn item(index: usize, source: ValidationError) -> Self {
        Self::Item {
            index,
            source: Box::new(source),
        }
    }

    pub(crate) fn query(index: usize, source: ValidationError) -> Self {
        Self::Query {
            index,
            source: Box::new(source),
        }
    }

    /// Returns the innermost cause, skipping every positional wrapper.
    pub fn root_cause(&self) -> &ValidationError {
        match self {
            Self::Link { source, .. }
            | Self::Item { source, .. }
            | Self::Query { source, .. }
            | Self::Template { source }
            | Self::Error { source } => source.root_cause(),
            other => other,
        }
    }
}
