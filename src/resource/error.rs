//! Error types for the Resource aggregate.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by [`Resource`](crate::Resource) operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// An Add/Set argument failed its own rule; the resource was not touched.
    #[error("failed to validate {kind}: {source}")]
    Rejected {
        kind: &'static str,
        source: ValidationError,
    },

    /// The document as a whole is not valid.
    #[error("resource validation failed: {0}")]
    Invalid(#[from] ValidationError),

    /// The JSON encoder or decoder failed.
    #[error("resource serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ResourceError {
    /// Returns the validation failure behind this error, if there is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Rejected { source, .. } | Self::Invalid(source) => Some(source),
            Self::Serialization(_) => None,
        }
    }
}
