use serde::{Deserialize, Serialize};

use super::Data;
use crate::validation::{Validate, ValidationError};

/// A parameterized search or action the client can fill in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Data>,
}

impl Query {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_data(mut self, data: Vec<Data>) -> Self {
        self.data = data;
        self
    }
}

impl Validate for Query {
    // Same rule as a link; the data parameters are unconstrained.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.rel.is_empty() {
            return Err(ValidationError::EmptyRel);
        }
        if self.href.is_empty() {
            return Err(ValidationError::EmptyHref);
        }
        Ok(())
    }
}
