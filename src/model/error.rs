use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationError};

/// The document-level `error` object.
///
/// Named `ErrorObject` to keep it apart from the Rust error types of this
/// crate. None of its fields are required; empty ones are left off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorObject {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Validate for ErrorObject {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
